/// UI rendering: the status bar overlay drawn on top of the canvas.
use crate::config::StatusPosition;
use crate::draw::canvas::Canvas;
use crate::draw::Color;
use crate::sketch::SketchState;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Distance from the canvas edge to the status bar
const STATUS_MARGIN: f64 = 10.0;
/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Radius of the pen/brush color swatches
const SWATCH_RADIUS: f64 = 5.0;
/// Horizontal gap between the text and each swatch
const SWATCH_GAP: f64 = 10.0;
/// Status bar background color
const STATUS_BG_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.85];
/// Status bar text color
const STATUS_TEXT_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
/// Swatch color when the pen or brush is set to "none"
const SWATCH_NONE_COLOR: [f64; 4] = [0.6, 0.6, 0.6, 1.0];

/// Render the status bar showing the active drawing mode, an in-progress
/// label when a shape is half-entered, and pen/brush color swatches.
pub fn render_status_bar(
    ctx: &cairo::Context,
    sketch: &SketchState,
    screen_width: u32,
    screen_height: u32,
) {
    // Build status text: mode name plus the builder's progress, if any
    let status_text = match sketch.progress_label() {
        Some(progress) => format!("[{}] {}", sketch.active_mode_name(), progress),
        None => format!("[{}]", sketch.active_mode_name()),
    };

    // Set font
    ctx.set_font_size(sketch.status_font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    // Measure text
    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return; // Gracefully skip rendering if font measurement fails
        }
    };
    let text_width = extents.width();
    let text_height = extents.height();

    // Two swatches trail the text: pen first, brush second
    let swatch_span = 2.0 * (SWATCH_GAP + 2.0 * SWATCH_RADIUS);
    let bar_width = text_width + swatch_span;

    // Calculate the text baseline position for the chosen corner
    let (x, y) = match sketch.status_position {
        StatusPosition::TopLeft => (STATUS_MARGIN, STATUS_MARGIN + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - bar_width - STATUS_MARGIN,
            STATUS_MARGIN + text_height,
        ),
        StatusPosition::BottomLeft => (STATUS_MARGIN, screen_height as f64 - STATUS_MARGIN),
        StatusPosition::BottomRight => (
            screen_width as f64 - bar_width - STATUS_MARGIN,
            screen_height as f64 - STATUS_MARGIN,
        ),
    };

    // Draw semi-transparent background
    let [r, g, b, a] = STATUS_BG_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        bar_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Draw text
    let [r, g, b, a] = STATUS_TEXT_COLOR;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    let _ = ctx.show_text(&status_text);

    // Draw pen and brush swatches after the text, vertically centered on it.
    // The pen swatch is a ring (outline color), the brush swatch a filled
    // disc (fill color); "none" renders as a crossed-out gray ring.
    let swatch_y = y - text_height / 2.0;
    let pen_x = x + text_width + SWATCH_GAP + SWATCH_RADIUS;
    let brush_x = pen_x + SWATCH_RADIUS + SWATCH_GAP + SWATCH_RADIUS;
    draw_swatch(ctx, pen_x, swatch_y, sketch.canvas.pen_color(), false);
    draw_swatch(ctx, brush_x, swatch_y, sketch.canvas.brush_color(), true);
}

/// Draws one color swatch: a filled disc for brushes, a stroked ring for
/// pens, or a crossed-out gray ring when the color is `None`.
fn draw_swatch(ctx: &cairo::Context, cx: f64, cy: f64, color: Option<Color>, filled: bool) {
    match color {
        Some(color) => {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.arc(cx, cy, SWATCH_RADIUS, 0.0, 2.0 * std::f64::consts::PI);
            if filled {
                let _ = ctx.fill();
            } else {
                ctx.set_line_width(2.0);
                let _ = ctx.stroke();
            }
        }
        None => {
            let [r, g, b, a] = SWATCH_NONE_COLOR;
            ctx.set_source_rgba(r, g, b, a);
            ctx.set_line_width(1.5);
            ctx.arc(cx, cy, SWATCH_RADIUS, 0.0, 2.0 * std::f64::consts::PI);
            let _ = ctx.stroke();
            // Diagonal slash marks the swatch as "no color"
            let offset = SWATCH_RADIUS * std::f64::consts::FRAC_1_SQRT_2;
            ctx.move_to(cx - offset, cy + offset);
            ctx.line_to(cx + offset, cy - offset);
            let _ = ctx.stroke();
        }
    }
}
