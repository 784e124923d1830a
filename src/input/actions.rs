//! Game action definitions

/// All actions the escape room reacts to
///
/// Keyboard / gamepad (Xbox naming):
/// - MoveForward/Backward/Left/Right = WASD or arrows / left stick
/// - Interact = E / Y
/// - Submit = Enter / A (code panel)
/// - Erase = Backspace / X (code panel)
/// - Cancel = Escape / B (close code panel, release pointer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,

    // Examine / use the object under the crosshair
    Interact,

    // Code panel
    Submit,
    Erase,
    Cancel,
}
