// Responds to xdg toplevel configure/close events; the window keeps the fixed size it was created with.
use log::{debug, info};
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        let suggested = (
            configure.new_size.0.map(|w| w.get()),
            configure.new_size.1.map(|h| h.get()),
        );
        if self.surface.is_configured() {
            debug!("Window reconfigured (suggested size {:?})", suggested);
        } else {
            info!(
                "Window configured: {}x{} (suggested size {:?})",
                self.surface.width(),
                self.surface.height(),
                suggested
            );
        }

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
