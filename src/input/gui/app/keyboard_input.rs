use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Monitor test actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Stand-in for the platform's own fullscreen exit key.
    ExitFullscreen,
    AdvanceColour,
    ToggleFullscreen,
}

/// Maps a key press to a command. Releases and auto-repeats map to nothing,
/// as does everything while a text field has focus.
#[must_use]
pub fn key_command(
    key_code: KeyCode,
    state: ElementState,
    repeat: bool,
    text_editing: bool,
) -> Option<KeyCommand> {
    if state != ElementState::Pressed || repeat || text_editing {
        return None;
    }

    match key_code {
        KeyCode::Escape => Some(KeyCommand::ExitFullscreen),
        KeyCode::Space | KeyCode::ArrowRight => Some(KeyCommand::AdvanceColour),
        KeyCode::KeyF => Some(KeyCommand::ToggleFullscreen),
        _ => None,
    }
}
