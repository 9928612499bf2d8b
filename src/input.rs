use card_core::PointerSample;
use glam::Vec2;
use web_sys as web;

/// What a key press asks the card to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleRotation,
    Reset,
    ToggleMute,
    ToggleStats,
    ToggleExpanded,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::ToggleRotation),
        "r" | "R" => Some(KeyAction::Reset),
        "m" | "M" => Some(KeyAction::ToggleMute),
        "s" | "S" => Some(KeyAction::ToggleStats),
        "e" | "E" => Some(KeyAction::ToggleExpanded),
        _ => None,
    }
}

/// Client coordinates relative to an element's top-left corner, in CSS px.
#[inline]
pub fn client_to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_local_px(ev: &web::PointerEvent, target: &web::Element) -> Vec2 {
    let rect = target.get_bounding_client_rect();
    client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

/// Gesture sample for `ev`, timestamped on the page clock (ms).
#[inline]
pub fn pointer_sample(ev: &web::PointerEvent, target: &web::Element) -> PointerSample {
    let pos = pointer_local_px(ev, target);
    PointerSample::new(ev.pointer_id(), pos.x, pos.y, ev.time_stamp())
}
