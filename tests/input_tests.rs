// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn shortcut_keys_map_to_actions() {
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleRotation));
    assert_eq!(action_for_key("r"), Some(KeyAction::Reset));
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMute));
    assert_eq!(action_for_key("s"), Some(KeyAction::ToggleStats));
    assert_eq!(action_for_key("e"), Some(KeyAction::ToggleExpanded));
}

#[test]
fn shortcuts_ignore_case() {
    for key in ["r", "m", "s", "e"] {
        assert_eq!(action_for_key(key), action_for_key(&key.to_uppercase()));
    }
}

#[test]
fn unbound_keys_do_nothing() {
    for key in ["", "x", "Enter", "ArrowUp", "rr", "Shift"] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn client_points_are_relative_to_the_element() {
    let origin = Vec2::new(40.0, 120.0);
    assert_eq!(client_to_local(Vec2::new(40.0, 120.0), origin), Vec2::ZERO);
    assert_eq!(
        client_to_local(Vec2::new(140.0, 100.0), origin),
        Vec2::new(100.0, -20.0)
    );
}
