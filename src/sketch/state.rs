//! Session orchestrator: routes events to the registry, applies console
//! effects, and tracks redraw/exit flags for the backend.

use log::{debug, info, warn};

use crate::config::StatusPosition;
use crate::console::{Console, ConsoleEffect};
use crate::draw::{Canvas, CanvasState, Color, MarkerStyle, Point};
use crate::util::{self, Rect};

use super::events::{ClickButton, ClickEvent, Key};
use super::registry::ModeRegistry;

/// Main session state: the canvas, the mode registry, the console, and the
/// flags the backend polls between dispatches.
pub struct SketchState {
    /// Committed shapes plus current pen/brush colors
    pub canvas: CanvasState,
    /// Mode table and the active click binding
    pub registry: ModeRegistry,
    /// Console prompt state machine; `None` when the console is disabled
    pub console: Option<Console>,
    /// Whether user requested to exit the sketch pad
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the status bar is drawn
    pub show_status_bar: bool,
    /// Status bar corner
    pub status_position: StatusPosition,
    /// Status bar font size in points
    pub status_font_size: f64,
    /// Surface width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by backend after configuration)
    pub screen_height: u32,
}

impl SketchState {
    /// Creates the session state with startup colors and the initial mode.
    ///
    /// `initial_mode` is the command-line override; `default_mode` comes from
    /// config. An unknown name in either just keeps the registry's builtin
    /// default bound, with a warning.
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        pen: Option<Color>,
        brush: Option<Color>,
        line_width: f64,
        marker: MarkerStyle,
        initial_mode: Option<String>,
        default_mode: &str,
        console: Option<Console>,
        show_status_bar: bool,
        status_position: StatusPosition,
        status_font_size: f64,
    ) -> Self {
        let mut registry = ModeRegistry::with_default_modes(marker);

        let requested = initial_mode.unwrap_or_else(|| default_mode.to_string());
        if !registry.activate(&requested) {
            warn!(
                "Unknown drawing mode '{requested}', keeping '{}'",
                registry.active_name().unwrap_or("none")
            );
        }

        Self {
            canvas: CanvasState::new(pen, brush, line_width),
            registry,
            console,
            should_exit: false,
            needs_redraw: true,
            show_status_bar,
            status_position,
            status_font_size,
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Updates surface dimensions after backend configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Processes a mouse button press on the canvas.
    pub fn on_mouse_press(&mut self, button: ClickButton, x: i32, y: i32) {
        let event = ClickEvent::new(button, Point::new(x, y));
        self.registry.dispatch(event, &mut self.canvas);

        // The in-progress label (vertex count / center marker) lives in the
        // status bar, so clicks invalidate it along with any new geometry.
        if self.show_status_bar {
            self.canvas.mark_all_dirty();
        }
        if self.canvas.has_pending_damage() {
            self.needs_redraw = true;
        }
    }

    /// Processes a key press delivered by the backend.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Char('c') => {
                if let Some(console) = self.console.as_mut() {
                    debug!("Console focus requested from canvas");
                    console.focus();
                }
            }
            Key::Escape => {
                info!("Escape pressed - exiting");
                self.should_exit = true;
            }
            _ => {}
        }
    }

    /// Handles one console input line and re-prints the prompt.
    pub fn on_console_line(&mut self, line: &str) {
        let Some(console) = self.console.as_mut() else {
            return;
        };

        match console.handle_line(line) {
            ConsoleEffect::None => {}
            ConsoleEffect::SetPenColor(color) => {
                info!("Pen color set to {}", describe_color(color));
                self.canvas.set_pen_color(color);
                self.mark_status_dirty();
            }
            ConsoleEffect::SetBrushColor(color) => {
                info!("Brush color set to {}", describe_color(color));
                self.canvas.set_brush_color(color);
                self.mark_status_dirty();
            }
            ConsoleEffect::ActivateMode(name) => {
                // Unknown names are silently ignored; the binding stays put.
                if self.registry.activate(&name) {
                    self.mark_status_dirty();
                }
            }
        }

        if let Some(console) = self.console.as_ref() {
            console.print_prompt();
        }
    }

    /// Name of the active drawing mode, for the status bar.
    pub fn active_mode_name(&self) -> &str {
        self.registry.active_name().unwrap_or("none")
    }

    /// In-progress description from the active builder, if mid-shape.
    pub fn progress_label(&self) -> Option<String> {
        self.registry.active_builder()?.progress_label()
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.canvas.take_damage(width, height)
    }

    fn mark_status_dirty(&mut self) {
        if self.show_status_bar {
            self.canvas.mark_all_dirty();
            self.needs_redraw = true;
        }
    }
}

fn describe_color(color: Option<Color>) -> &'static str {
    match color {
        Some(color) => util::color_to_name(&color),
        None => "none",
    }
}
