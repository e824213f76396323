// Coordinates backend startup/shutdown and drives the calloop event loop while
// delegating rendering & protocol state to `WaylandState` and its handler modules.
use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use calloop::{EventLoop, channel};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::calloop_wayland_source::WaylandSource,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{config::Config, sketch::SketchState};

/// Bail out after this many render failures in a row; a persistently broken
/// surface would otherwise spin the loop forever.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend: owns the session state until the event loop takes over.
pub struct WaylandBackend {
    config: Config,
    sketch: SketchState,
}

impl WaylandBackend {
    pub fn new(config: Config, sketch: SketchState) -> Self {
        Self { config, sketch }
    }

    pub fn run(self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, event_queue) =
            registry_queue_init::<WaylandState>(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            self.config,
            self.sketch,
        );

        // Create the canvas surface: an unanchored layer surface the compositor
        // places for us, sized from config, with keyboard focus on demand so the
        // terminal running the console keeps focus until the canvas is clicked.
        info!(
            "Creating canvas surface ({}x{})",
            state.config.window.width, state.config.window.height
        );
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Top,
            Some("waysketch"),
            None, // Default output
        );
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer_surface.set_size(state.config.window.width, state.config.window.height);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Canvas surface created");

        // Event loop: Wayland events and console lines, one handler at a time.
        let mut event_loop: EventLoop<WaylandState> =
            EventLoop::try_new().context("Failed to create event loop")?;

        WaylandSource::new(conn, event_queue)
            .insert(event_loop.handle())
            .map_err(|e| anyhow::anyhow!("Failed to insert Wayland event source: {e}"))?;

        if state.sketch.console.is_some() {
            let (sender, receiver) = channel::channel::<String>();
            spawn_console_reader(sender)?;

            event_loop
                .handle()
                .insert_source(receiver, |event, _, state: &mut WaylandState| match event {
                    channel::Event::Msg(line) => state.sketch.on_console_line(&line),
                    channel::Event::Closed => {
                        info!("Console input closed");
                    }
                })
                .map_err(|e| anyhow::anyhow!("Failed to insert console source: {e}"))?;

            if let Some(console) = state.sketch.console.as_ref() {
                console.print_prompt();
            }
        }

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;

        loop {
            event_loop
                .dispatch(None::<std::time::Duration>, &mut state)
                .context("Event loop dispatch failed")?;

            if state.sketch.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Render if needed, throttled by the outstanding frame callback
            // when vsync is enabled.
            let can_render = state.surface.is_configured()
                && state.sketch.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.sketch.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid an infinite error loop
                        state.sketch.needs_redraw = false;
                    }
                }
            } else if state.sketch.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");
        Ok(())
    }
}

/// Pumps stdin lines into the event loop.
///
/// Reading happens on a plumbing thread; the lines are handled on the loop
/// thread, so console commands stay serialized with click events.
fn spawn_console_reader(sender: channel::Sender<String>) -> Result<()> {
    thread::Builder::new()
        .name("console-stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Console read error: {e}");
                        break;
                    }
                }
            }
            debug!("Console reader thread exiting");
        })
        .context("Failed to spawn console reader thread")?;
    Ok(())
}
