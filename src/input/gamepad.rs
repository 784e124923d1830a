//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend, reports nothing connected

use macroquad::prelude::Vec2;

// Standard gamepad button indices (Xbox layout, Web Gamepad API numbering)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const B: u32 = 1;           // ActionRight / East
    pub const X: u32 = 2;           // ActionLeft / West
    pub const Y: u32 = 3;           // ActionUp / North
    pub const START: u32 = 9;       // Start/Options
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }

        pub fn right_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    tracing::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                buttons: 0,
                last_buttons: 0,
            }
        }

        /// Drain gilrs events and latch this frame's button mask
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while let Some(event) = gilrs.next_event() {
                    if let gilrs::EventType::Connected = event.event {
                        tracing::info!("Gamepad connected: {}", gilrs.gamepad(event.id).name());
                    }
                }
            }
            self.last_buttons = self.buttons;
            self.buttons = self.button_mask();
        }

        fn active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn button_mask(&self) -> u32 {
            let Some(gp) = self.active_gamepad() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << super::button::B; }
            if gp.is_pressed(GilrsButton::West) { mask |= 1 << super::button::X; }
            if gp.is_pressed(GilrsButton::North) { mask |= 1 << super::button::Y; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        /// Down this frame but not last frame
        pub fn is_button_pressed(&self, button: u32) -> bool {
            let bit = 1 << button;
            (self.buttons & bit) != 0 && (self.last_buttons & bit) == 0
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }

        pub fn right_stick(&self) -> Vec2 {
            let Some(gp) = self.active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::RightStickX);
            let y = gp.value(Axis::RightStickY);
            apply_deadzone(x, y, self.deadzone)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_swallows_drift() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales_full_deflection() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }
}
