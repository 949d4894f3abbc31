use crate::core::InputEvent;
use web_sys as web;

// Viewport (client) coordinates; the canvas covers the window.

#[inline]
pub fn from_mouse(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerMove {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
    }
}

/// First touch point only; `None` for an empty touch list.
#[inline]
pub fn from_touch(ev: &web::TouchEvent) -> Option<InputEvent> {
    let t = ev.touches().get(0)?;
    Some(InputEvent::TouchMove {
        x: t.client_x() as f32,
    })
}

#[inline]
pub fn from_wheel(ev: &web::WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: ev.delta_y() as f32,
    }
}
