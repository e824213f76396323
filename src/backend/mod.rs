use anyhow::Result;

use crate::config::Config;
use crate::sketch::SketchState;

pub mod wayland;

/// Run the Wayland backend with the full event loop.
///
/// Blocks until the user exits (Escape, console EOF with a closed surface,
/// or the compositor closing the layer surface).
///
/// # Arguments
/// * `config` - Loaded and validated configuration
/// * `sketch` - Session state built by the caller (colors, registry, console)
pub fn run_wayland(config: Config, sketch: SketchState) -> Result<()> {
    wayland::WaylandBackend::new(config, sketch).run()
}
