//! First-person player controller
//!
//! The player is a camera: `position` is the eye. Velocity lives in the
//! player's local frame (x = strafe right, z = forward) and is damped every
//! step, so releasing the keys glides to a stop.

use crate::input::MoveFlags;
use crate::math::Vec3;
use crate::settings::MovementSettings;

/// Pitch stays just short of straight up/down
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    /// Eye position
    pub position: Vec3,
    /// Heading in radians, 0 faces -Z, positive turns right
    pub yaw: f32,
    /// Positive looks up
    pub pitch: f32,
    /// Local velocity (x = strafe, z = forward)
    pub velocity: Vec3,
}

impl PlayerController {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: 0.0,
            velocity: Vec3::ZERO,
        }
    }

    /// View direction
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// View direction flattened onto the floor
    pub fn forward_xz(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Strafe direction on the floor
    pub fn right_xz(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Apply a look delta. Positive `dx` turns right, positive `dy` looks down.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw = (self.yaw + dx).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch - dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Advance the velocity by one step and return the proposed new eye
    /// position. The position itself is not changed: collision decides.
    pub fn integrate(&mut self, flags: MoveFlags, delta: f32, settings: &MovementSettings) -> Vec3 {
        let delta = delta.clamp(0.0, settings.max_step);

        // Damping, never overshooting past zero
        let keep = (1.0 - settings.damping * delta).max(0.0);
        self.velocity.x *= keep;
        self.velocity.z *= keep;

        let (strafe, forward) = flags.axes();
        let dir = Vec3::new(strafe, 0.0, forward).normalize();

        if flags.forward || flags.backward {
            self.velocity.z += dir.z * settings.acceleration * delta;
        }
        if flags.left || flags.right {
            self.velocity.x += dir.x * settings.acceleration * delta;
        }

        self.position
            + self.right_xz() * (self.velocity.x * delta)
            + self.forward_xz() * (self.velocity.z * delta)
    }
}
