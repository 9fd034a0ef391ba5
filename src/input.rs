//! Keyboard bindings
//!
//! Keys are matched by their DOM `KeyboardEvent.key` name so the mapping can
//! be tested without a browser.

use crate::controller::InputEvent;

/// Map a key name to a match input. Unbound keys return `None`.
pub fn key_to_input(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowUp" | "Up" => Some(InputEvent::SpeedUp),
        "ArrowDown" | "Down" => Some(InputEvent::SpeedDown),
        " " | "Spacebar" => Some(InputEvent::TogglePause),
        _ => None,
    }
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.key()
}
