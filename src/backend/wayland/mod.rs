//! Wayland backend: a wlr-layer-shell surface rendered with Cairo over
//! shared memory, driven by a calloop event loop that multiplexes compositor
//! events with console lines from stdin.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
