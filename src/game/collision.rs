//! Collision System
//!
//! The player is an axis-aligned box hanging from the eye position. A move
//! is all or nothing: if the box at the proposed position overlaps any solid,
//! the player stays exactly where they were and loses their velocity.

use crate::math::{Aabb, Vec3};
use crate::settings::PlayerSettings;
use crate::world::Layout;
use super::controller::PlayerController;
use super::puzzle::PuzzleState;

/// Result of a movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The move was rejected
    pub blocked: bool,
}

/// The player's collision box for an eye position
pub fn player_box(eye: Vec3, player: &PlayerSettings) -> Aabb {
    Aabb {
        min: Vec3::new(eye.x - player.radius, eye.y - player.eye_height, eye.z - player.radius),
        max: Vec3::new(eye.x + player.radius, eye.y + player.head_room, eye.z + player.radius),
    }
}

pub fn collides(bounds: &Aabb, solids: &[Aabb]) -> bool {
    solids.iter().any(|s| s.intersects(bounds))
}

/// Everything that currently blocks movement: walls, solid props and
/// doors that are still shut
pub fn solids(layout: &Layout, puzzle: &PuzzleState) -> Vec<Aabb> {
    let walls = layout.walls.iter().map(|w| w.bounds);
    let props = layout
        .props
        .iter()
        .enumerate()
        .filter(|(i, _)| puzzle.is_solid(layout, *i))
        .map(|(_, p)| p.bounds);
    walls.chain(props).collect()
}

/// Try to move the controller to `proposed`
pub fn step(
    controller: &mut PlayerController,
    proposed: Vec3,
    solids: &[Aabb],
    player: &PlayerSettings,
) -> StepResult {
    if collides(&player_box(proposed, player), solids) {
        controller.velocity = Vec3::ZERO;
        return StepResult { blocked: true };
    }
    controller.position = proposed;
    StepResult { blocked: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveFlags;
    use crate::settings::MovementSettings;
    use crate::world::builtin_layout;

    fn wall_ahead() -> Vec<Aabb> {
        // Thin wall across the corridor at z = -1
        vec![Aabb::new(Vec3::new(-5.0, 0.0, -1.2), Vec3::new(5.0, 3.0, -1.0))]
    }

    #[test]
    fn test_player_box_dimensions() {
        let player = PlayerSettings::default();
        let b = player_box(Vec3::new(1.0, 1.6, 2.0), &player);
        assert!((b.min.y - 0.0).abs() < 1e-6);
        assert!((b.max.y - 1.7).abs() < 1e-6);
        assert!((b.size().x - 0.6).abs() < 1e-6);
        assert!((b.size().z - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_free_move_accepted() {
        let player = PlayerSettings::default();
        let mut controller = PlayerController::new(Vec3::new(0.0, 1.6, 0.0), 0.0);
        let target = Vec3::new(0.0, 1.6, -0.2);
        let result = step(&mut controller, target, &wall_ahead(), &player);
        assert!(!result.blocked);
        assert_eq!(controller.position, target);
    }

    #[test]
    fn test_rejected_move_restores_position_exactly() {
        let player = PlayerSettings::default();
        let movement = MovementSettings::default();
        let solids = wall_ahead();
        let mut controller = PlayerController::new(Vec3::new(0.0, 1.6, 0.0), 0.0);
        let flags = MoveFlags { forward: true, ..Default::default() };

        let mut blocked_once = false;
        for _ in 0..200 {
            let before = controller.position;
            let proposed = controller.integrate(flags, 0.016, &movement);
            let result = step(&mut controller, proposed, &solids, &player);
            if result.blocked {
                blocked_once = true;
                assert_eq!(controller.position, before);
                assert_eq!(controller.velocity, Vec3::ZERO);
            }
            assert!(!collides(&player_box(controller.position, &player), &solids));
        }
        assert!(blocked_once);
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let player = PlayerSettings { radius: 0.25, ..Default::default() };
        // Box front face exactly on the wall's back face
        let eye = Vec3::new(0.0, 1.6, -0.75);
        assert!(!collides(&player_box(eye, &player), &wall_ahead()));
    }

    #[test]
    fn test_shut_door_blocks_until_opened() {
        use crate::world::PropId;

        let layout = builtin_layout("annex").unwrap();
        let mut puzzle = PuzzleState::new(&layout);
        let player = PlayerSettings::default();
        let in_doorway = player_box(Vec3::new(0.0, 1.6, 5.1), &player);

        puzzle.interact(&layout, &PropId::new("annex_door"));
        assert!(collides(&in_doorway, &solids(&layout, &puzzle)));

        puzzle.submit_code(&layout, &PropId::new("terminal"), "1987");
        puzzle.interact(&layout, &PropId::new("safe"));
        puzzle.interact(&layout, &PropId::new("brass_key"));
        puzzle.interact(&layout, &PropId::new("annex_door"));
        assert!(!collides(&in_doorway, &solids(&layout, &puzzle)));
    }

    #[test]
    fn test_hidden_props_do_not_block() {
        let layout = builtin_layout("office").unwrap();
        let puzzle = PuzzleState::new(&layout);
        let key = layout.prop(&crate::world::PropId::new("door_key")).unwrap();
        assert!(!solids(&layout, &puzzle).contains(&key.bounds));
    }
}
