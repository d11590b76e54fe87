// Keyboard shortcuts for the transport controls. Kept free of web-sys so the
// mapping can be exercised on the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlay,
    Next,
    Prev,
    CycleVolume,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        " " => Some(KeyCommand::TogglePlay),
        "ArrowRight" => Some(KeyCommand::Next),
        "ArrowLeft" => Some(KeyCommand::Prev),
        "m" | "M" => Some(KeyCommand::CycleVolume),
        _ => None,
    }
}
