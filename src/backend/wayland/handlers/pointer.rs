// Feeds pointer events (motion/buttons) into the input state to keep the canvas reactive.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    self.input_state.on_mouse_motion(x, y);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({}, {})", button, x, y);

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_press(mb, x, y);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_release(mb, x, y);
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}
