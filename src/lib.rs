//! Library exports for reusing waysketch subsystems.
//!
//! Exposes the drawing-mode state machine and its supporting modules so that
//! integration tests (and external tooling) can exercise the core without
//! going through the Wayland binary.

pub mod config;
pub mod console;
pub mod draw;
pub mod sketch;
pub mod ui;
pub mod util;

pub use config::Config;
