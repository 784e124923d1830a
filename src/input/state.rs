//! Input state management
//!
//! Polls keyboard/mouse (macroquad) and gamepad input once per frame,
//! combining them into an `InputFrame`.

use macroquad::prelude::*;
use crate::settings::Settings;
use super::{Action, Gamepad, button};

/// Stick deflection that counts as a held movement key
const STICK_MOVE_THRESHOLD: f32 = 0.3;

/// The four movement flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// (strafe, forward) in -1..1, opposing keys cancel
    pub fn axes(&self) -> (f32, f32) {
        (
            self.right as i32 as f32 - self.left as i32 as f32,
            self.forward as i32 as f32 - self.backward as i32 as f32,
        )
    }
}

/// Everything the game needs from one frame of input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub movement: MoveFlags,
    /// Interact was pressed this frame
    pub interact: bool,
    /// Look change in radians (yaw, pitch); positive pitch looks down
    pub look: (f32, f32),
    /// Printable characters typed this frame
    pub typed: Vec<char>,
    pub submit: bool,
    pub erase: bool,
    pub cancel: bool,
    /// Request to grab the pointer (click or gamepad Start)
    pub engage: bool,
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
    last_mouse: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            last_mouse: None,
        }
    }

    /// Read this frame's input. Mouse look only counts while the pointer is
    /// grabbed.
    pub fn poll(&mut self, pointer_locked: bool, settings: &Settings, delta: f32) -> InputFrame {
        self.gamepad.poll();

        let mut frame = InputFrame {
            movement: self.movement(),
            interact: self.action_pressed(Action::Interact),
            submit: self.action_pressed(Action::Submit),
            erase: self.action_pressed(Action::Erase),
            cancel: self.action_pressed(Action::Cancel),
            engage: is_mouse_button_pressed(MouseButton::Left)
                || self.gamepad.is_button_pressed(button::START),
            ..Default::default()
        };

        while let Some(ch) = get_char_pressed() {
            if crate::ui::is_code_char(ch) {
                frame.typed.push(ch);
            }
        }

        // Mouse look from absolute position deltas
        let mouse = mouse_position();
        if pointer_locked {
            if let Some(last) = self.last_mouse {
                frame.look.0 += (mouse.0 - last.0) * settings.mouse_sensitivity;
                frame.look.1 += (mouse.1 - last.1) * settings.mouse_sensitivity;
            }
            self.last_mouse = Some(mouse);
        } else {
            self.last_mouse = None;
        }

        // Right stick look (stick up = look up)
        let stick = self.gamepad.right_stick();
        frame.look.0 += stick.x * settings.stick_look_speed * delta;
        frame.look.1 -= stick.y * settings.stick_look_speed * delta;

        frame
    }

    fn movement(&self) -> MoveFlags {
        let stick = self.gamepad.left_stick();
        MoveFlags {
            forward: self.action_down(Action::MoveForward) || stick.y > STICK_MOVE_THRESHOLD,
            backward: self.action_down(Action::MoveBackward) || stick.y < -STICK_MOVE_THRESHOLD,
            left: self.action_down(Action::MoveLeft) || stick.x < -STICK_MOVE_THRESHOLD,
            right: self.action_down(Action::MoveRight) || stick.x > STICK_MOVE_THRESHOLD,
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveForward => is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            Action::MoveBackward => is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Interact => is_key_down(KeyCode::E),
            Action::Submit => is_key_down(KeyCode::Enter) || is_key_down(KeyCode::KpEnter),
            Action::Erase => is_key_down(KeyCode::Backspace),
            Action::Cancel => is_key_down(KeyCode::Escape),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Interact => is_key_pressed(KeyCode::E),
            Action::Submit => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
            Action::Erase => is_key_pressed(KeyCode::Backspace),
            Action::Cancel => is_key_pressed(KeyCode::Escape),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        match action {
            Action::Interact => self.gamepad.is_button_down(button::Y),
            Action::Submit => self.gamepad.is_button_down(button::A),
            Action::Erase => self.gamepad.is_button_down(button::X),
            Action::Cancel => self.gamepad.is_button_down(button::B),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Interact => self.gamepad.is_button_pressed(button::Y),
            Action::Submit => self.gamepad.is_button_pressed(button::A),
            Action::Erase => self.gamepad.is_button_pressed(button::X),
            Action::Cancel => self.gamepad.is_button_pressed(button::B),
            _ => false,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
