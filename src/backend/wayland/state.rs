// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules, plus the Cairo render path that paints the canvas into shm buffers.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{config::Config, draw, sketch::SketchState, util::Rect};

use super::surface::SurfaceState;

/// Internal Wayland state shared across the backend modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Session state: canvas, mode registry, console
    pub(super) sketch: SketchState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        sketch: SketchState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            sketch,
        }
    }

    /// Paints the whole canvas into a fresh shm buffer and commits it.
    ///
    /// Paint order: opaque background, committed shapes in commit order,
    /// status bar overlay. Damage is taken from the sketch state's dirty
    /// tracker; an empty tracker damages the full surface (first frame,
    /// resize).
    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            let result = pool
                .create_buffer(
                    width as i32,
                    height as i32,
                    (width * 4) as i32,
                    wl_shm::Format::Argb8888,
                )
                .context("Failed to create buffer")?;
            debug!("Buffer acquired from pool");
            result
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel: alpha, red, green, blue)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to Wayland,
        //    ensuring Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        // 6. The buffer remains valid throughout Cairo's usage (enforced by Rust's borrow checker)
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        // Render using Cairo
        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Opaque background; the previous buffer's contents never show through
        debug!("Painting background");
        draw::render_background(&ctx, self.config.window.background.to_color());

        // Render all committed shapes in commit order
        let shapes = &self.sketch.canvas.frame().shapes;
        debug!("Rendering {} committed shapes", shapes.len());
        draw::render_shapes(&ctx, shapes);

        // Render status bar if enabled
        if self.sketch.show_status_bar {
            crate::ui::render_status_bar(&ctx, &self.sketch, width, height);
        }

        // Flush Cairo
        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;

        let dirty_regions = resolve_damage_regions(
            surface_width,
            surface_height,
            self.sketch.take_dirty_regions(),
        );

        for rect in &dirty_regions {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

/// Filters out degenerate damage rectangles; when none survive, damages the
/// full surface so the first frame and resizes always repaint everything.
fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty() && width > 0 && height > 0 {
        if let Some(full) = Rect::new(0, 0, width, height) {
            regions.push(full);
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(800, 600, Vec::new());
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(0, 0, 800, 600).unwrap());
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect {
                    x: 10,
                    y: 10,
                    width: 50,
                    height: 40,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(10, 10, 50, 40).unwrap());
    }

    #[test]
    fn resolve_damage_preserves_existing_regions() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![Rect {
                x: 5,
                y: 5,
                width: 20,
                height: 30,
            }],
        );

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(5, 5, 20, 30).unwrap());
    }
}
