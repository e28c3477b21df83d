// Wayland backend: an xdg-shell toplevel window rendered with Cairo into shm buffers.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
