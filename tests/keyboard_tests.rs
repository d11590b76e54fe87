// Host-side tests for the keyboard shortcut mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use keys::*;

#[test]
fn transport_keys_map_to_commands() {
    assert_eq!(command_for_key(" "), Some(KeyCommand::TogglePlay));
    assert_eq!(command_for_key("ArrowRight"), Some(KeyCommand::Next));
    assert_eq!(command_for_key("ArrowLeft"), Some(KeyCommand::Prev));
    assert_eq!(command_for_key("m"), Some(KeyCommand::CycleVolume));
    assert_eq!(command_for_key("M"), Some(KeyCommand::CycleVolume));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Enter", "Escape", "ArrowUp", "ArrowDown", "", "Space"] {
        assert_eq!(command_for_key(key), None, "unexpected mapping for {key:?}");
    }
}
