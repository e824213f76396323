// Feeds pointer clicks into the active shape builder. Motion, scroll, and the
// middle button carry no drawing meaning here and are dropped at this boundary.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::sketch::ClickButton;

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
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!(
                        "Pointer entered at ({}, {})",
                        event.position.0, event.position.1
                    );
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, event.position.0, event.position.1
                    );

                    let click = match button {
                        BTN_LEFT => ClickButton::Primary,
                        BTN_RIGHT => ClickButton::Secondary,
                        _ => continue,
                    };

                    self.sketch.on_mouse_press(
                        click,
                        event.position.0 as i32,
                        event.position.1 as i32,
                    );
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                }
                PointerEventKind::Motion { .. } | PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
