use clap::{ArgAction, Parser};

mod backend;
mod config;
mod console;
mod draw;
mod sketch;
mod ui;
mod util;

use config::Config;
use console::Console;
use sketch::SketchState;

#[derive(Parser, Debug)]
#[command(name = "waysketch")]
#[command(version = version_string())]
#[command(about = "Console-driven geometric sketch pad for Wayland compositors")]
struct Cli {
    /// Initial drawing mode (polygon or circle)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Write a commented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

const fn version_string() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("WAYSKETCH_GIT_HASH"),
        ")"
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        }
    };

    log::info!("Configuration loaded");
    log::debug!("  Window: {}x{}", config.window.width, config.window.height);
    log::debug!("  Default mode: {}", config.drawing.default_mode);
    log::debug!("  Line width: {:.1}px", config.drawing.line_width);
    log::debug!("  Buffer count: {}", config.performance.buffer_count);
    log::debug!("  VSync: {}", config.performance.enable_vsync);
    log::debug!(
        "  Status bar: {} @ {:?}",
        config.ui.show_status_bar,
        config.ui.status_position
    );

    let console = config
        .console
        .enabled
        .then(|| Console::new(config.console.clear_on_focus));

    // The original sketch pad set its pen color before reading any command;
    // startup colors come from config here.
    let sketch = SketchState::with_defaults(
        config.drawing.effective_pen(),
        config.drawing.effective_brush(),
        config.drawing.line_width,
        config.drawing.marker_style(),
        cli.mode,
        &config.drawing.default_mode,
        console,
        config.ui.show_status_bar,
        config.ui.status_position,
        config.ui.font_size,
    );

    log::info!("Starting sketch pad");
    log::info!("Canvas controls:");
    log::info!("  - Left click: add a polygon vertex / set a circle center or radius");
    log::info!("  - Right click: close and commit the polygon in progress");
    log::info!("  - c: jump back to the console prompt");
    log::info!("  - Escape: exit");
    log::info!("Console commands: pc (pen color), bc (brush color), gb (geometric object)");

    backend::run_wayland(config, sketch)?;

    log::info!("Sketch pad closed.");
    Ok(())
}
