//! Game Runtime
//!
//! Owns the loaded layout and all mutable game state, and advances it one
//! frame at a time from an `InputFrame`. Nothing in here touches macroquad,
//! so the whole loop runs in tests.

use crate::input::InputFrame;
use crate::math::Ray;
use crate::settings::Settings;
use crate::ui::CodeEntry;
use crate::world::{Layout, PropId};
use super::collision;
use super::controller::PlayerController;
use super::interaction::{pick, Pick};
use super::prompt::PromptState;
use super::puzzle::{Outcome, PuzzleState};

/// What the player is currently doing
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Walking around and looking at things
    Exploring,
    /// Code panel open for a terminal
    EnteringCode { terminal: PropId, entry: CodeEntry },
    /// Out of the room; counts down to a restart
    Escaped { remaining: f32 },
}

pub struct EscapeRoom {
    layout: Layout,
    settings: Settings,
    pub player: PlayerController,
    pub puzzle: PuzzleState,
    pub prompt: PromptState,
    phase: Phase,
    focus: Option<Pick>,
}

impl EscapeRoom {
    pub fn new(layout: Layout, settings: Settings) -> Self {
        tracing::info!(
            "Starting '{}' ({} rooms, {} props)",
            layout.name,
            layout.rooms.len(),
            layout.props.len()
        );
        Self {
            player: PlayerController::new(layout.spawn.position, layout.spawn.yaw),
            puzzle: PuzzleState::new(&layout),
            prompt: PromptState::new(settings.prompt_seconds),
            phase: Phase::Exploring,
            focus: None,
            layout,
            settings,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The interactive prop under the crosshair, if any
    pub fn focus(&self) -> Option<&Pick> {
        self.focus.as_ref()
    }

    /// Fresh puzzle, player back at the spawn point
    pub fn reset(&mut self) {
        tracing::info!("Restarting '{}'", self.layout.name);
        self.player = PlayerController::new(self.layout.spawn.position, self.layout.spawn.yaw);
        self.puzzle = PuzzleState::new(&self.layout);
        self.prompt.clear();
        self.phase = Phase::Exploring;
        self.focus = None;
    }

    /// Advance one frame. Returns true when the game consumed the cancel
    /// request, so it must not also release the pointer.
    pub fn tick(&mut self, frame: &InputFrame, delta: f32, pointer_locked: bool) -> bool {
        self.prompt.tick(delta);

        let cancel_claimed = match &mut self.phase {
            Phase::Exploring => {
                if pointer_locked {
                    self.explore(frame, delta);
                }
                false
            }
            Phase::EnteringCode { .. } => self.enter_code(frame),
            Phase::Escaped { remaining } => {
                *remaining -= delta;
                if *remaining <= 0.0 {
                    self.reset();
                }
                false
            }
        };

        for event in self.puzzle.events.drain() {
            tracing::info!("Puzzle event: {:?}", event);
        }

        cancel_claimed
    }

    fn explore(&mut self, frame: &InputFrame, delta: f32) {
        self.player.look(frame.look.0, frame.look.1);

        let proposed = self.player.integrate(frame.movement, delta, &self.settings.movement);
        let solids = collision::solids(&self.layout, &self.puzzle);
        let result = collision::step(&mut self.player, proposed, &solids, &self.settings.player);
        if result.blocked {
            tracing::trace!("Move blocked at {:?}", self.player.position);
        }

        self.refresh_focus();

        if frame.interact {
            if let Some(prop) = self.focus.as_ref().map(|f| f.prop.clone()) {
                self.interact_with(&prop);
            }
        }
    }

    /// Returns true if the panel was cancelled
    fn enter_code(&mut self, frame: &InputFrame) -> bool {
        let Phase::EnteringCode { terminal, entry } = &mut self.phase else {
            return false;
        };

        if frame.cancel {
            self.phase = Phase::Exploring;
            return true;
        }

        for &ch in &frame.typed {
            entry.insert_char(ch);
        }
        if frame.erase {
            entry.backspace();
        }
        if !frame.submit {
            return false;
        }

        let terminal = terminal.clone();
        let code = entry.text().to_string();
        let outcome = self.puzzle.submit_code(&self.layout, &terminal, &code);

        let solved = self
            .layout
            .prop_index(&terminal)
            .and_then(|i| self.puzzle.prop(i))
            .is_some_and(|s| s.solved);
        if solved {
            self.phase = Phase::Exploring;
        } else if let Phase::EnteringCode { entry, .. } = &mut self.phase {
            entry.clear();
        }

        self.apply(outcome);
        false
    }

    /// Interact with a prop as if the player had pressed the interact key
    /// while looking at it
    pub fn interact_with(&mut self, prop: &PropId) {
        let outcome = self.puzzle.interact(&self.layout, prop);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::None => {}
            Outcome::Prompt(message) => self.prompt.show(message),
            Outcome::RequestCode { terminal } => {
                tracing::debug!("Code entry opened for {}", terminal);
                self.phase = Phase::EnteringCode { terminal, entry: CodeEntry::new() };
            }
        }

        if self.puzzle.escaped() && !matches!(self.phase, Phase::Escaped { .. }) {
            self.phase = Phase::Escaped { remaining: self.settings.restart_seconds };
            self.focus = None;
        }
    }

    fn refresh_focus(&mut self) {
        let ray = Ray::new(self.player.position, self.player.forward());
        self.focus = pick(&ray, &self.layout, &self.puzzle, self.settings.interact_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveFlags;
    use crate::math::Vec3;
    use crate::world::builtin_layout;

    fn office() -> EscapeRoom {
        EscapeRoom::new(builtin_layout("office").unwrap(), Settings::default())
    }

    /// Stand in front of the desk looking down at the computer
    fn face_terminal(room: &mut EscapeRoom) {
        room.player.position = Vec3::new(-2.0, 1.6, -2.7);
        room.player.yaw = 0.0;
        room.player.pitch = -(0.4f32 / 1.5).atan();
    }

    fn typed(code: &str) -> InputFrame {
        InputFrame { typed: code.chars().collect(), ..Default::default() }
    }

    fn press(apply: impl FnOnce(&mut InputFrame)) -> InputFrame {
        let mut frame = InputFrame::default();
        apply(&mut frame);
        frame
    }

    #[test]
    fn test_no_movement_without_pointer_lock() {
        let mut room = office();
        let start = room.player.position;
        let forward = press(|f| f.movement = MoveFlags { forward: true, ..Default::default() });
        for _ in 0..10 {
            room.tick(&forward, 0.016, false);
        }
        assert_eq!(room.player.position, start);
    }

    #[test]
    fn test_walks_forward_when_locked() {
        let mut room = office();
        let start = room.player.position;
        let forward = press(|f| f.movement = MoveFlags { forward: true, ..Default::default() });
        for _ in 0..30 {
            room.tick(&forward, 0.016, true);
        }
        assert!(room.player.position.z < start.z);
        assert_eq!(room.player.position.y, start.y);
    }

    #[test]
    fn test_never_walks_through_the_back_wall() {
        let mut room = office();
        let forward = press(|f| f.movement = MoveFlags { forward: true, ..Default::default() });
        for _ in 0..600 {
            room.tick(&forward, 0.016, true);
        }
        assert!(room.player.position.z > -5.0 + room.settings().player.radius - 1e-4);
    }

    #[test]
    fn test_focus_and_code_entry() {
        let mut room = office();
        face_terminal(&mut room);
        room.tick(&InputFrame::default(), 0.016, true);
        assert_eq!(room.focus().map(|f| f.prop.as_str()), Some("terminal"));

        room.tick(&press(|f| f.interact = true), 0.016, true);
        assert!(matches!(room.phase(), Phase::EnteringCode { .. }));

        room.tick(&typed("1987"), 0.016, true);
        room.tick(&press(|f| f.submit = true), 0.016, true);

        assert_eq!(room.phase(), &Phase::Exploring);
        assert_eq!(room.prompt.current(), Some("ACCESS GRANTED. The safe is unlocked."));
    }

    #[test]
    fn test_interact_key_not_typed_into_panel() {
        let mut room = office();
        face_terminal(&mut room);
        room.tick(&InputFrame::default(), 0.016, true);

        // The E press opens the panel and also arrives as a typed 'e'
        room.tick(&InputFrame { interact: true, typed: vec!['e'], ..Default::default() }, 0.016, true);
        match room.phase() {
            Phase::EnteringCode { entry, .. } => assert!(entry.is_empty()),
            other => panic!("unexpected {:?}", other),
        }

        room.tick(&typed("e"), 0.016, true);
        match room.phase() {
            Phase::EnteringCode { entry, .. } => assert_eq!(entry.text(), "e"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_wrong_code_keeps_panel_open() {
        let mut room = office();
        room.interact_with(&PropId::new("terminal"));

        room.tick(&typed("12"), 0.016, true);
        room.tick(&press(|f| f.erase = true), 0.016, true);
        match room.phase() {
            Phase::EnteringCode { entry, .. } => assert_eq!(entry.text(), "1"),
            other => panic!("unexpected {:?}", other),
        }

        room.tick(&press(|f| f.submit = true), 0.016, true);
        match room.phase() {
            Phase::EnteringCode { entry, .. } => assert!(entry.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(room.prompt.current(), Some("Incorrect code. Try again."));
    }

    #[test]
    fn test_cancel_closes_panel_and_is_claimed() {
        let mut room = office();
        room.interact_with(&PropId::new("terminal"));
        let claimed = room.tick(&press(|f| f.cancel = true), 0.016, true);
        assert!(claimed);
        assert_eq!(room.phase(), &Phase::Exploring);

        // A second escape while exploring belongs to the pointer lock
        assert!(!room.tick(&press(|f| f.cancel = true), 0.016, true));
    }

    #[test]
    fn test_prompt_expires() {
        let mut room = office();
        room.interact_with(&PropId::new("sticky_note"));
        assert!(room.prompt.current().is_some());
        for _ in 0..4 {
            room.tick(&InputFrame::default(), 1.0, true);
        }
        assert!(room.prompt.current().is_none());
    }

    #[test]
    fn test_escape_then_restart() {
        let mut room = office();
        let layout = room.layout().clone();
        room.puzzle.submit_code(&layout, &PropId::new("terminal"), "1987");
        room.interact_with(&PropId::new("safe"));
        room.interact_with(&PropId::new("door_key"));
        room.player.position = Vec3::new(0.0, 1.6, 4.0);
        room.interact_with(&PropId::new("exit_door"));

        assert!(matches!(room.phase(), Phase::Escaped { .. }));
        assert_eq!(room.prompt.current(), Some("Congratulations! You escaped!"));

        room.tick(&InputFrame::default(), 1.0, true);
        room.tick(&InputFrame::default(), 1.0, true);
        assert!(matches!(room.phase(), Phase::Escaped { .. }));
        room.tick(&InputFrame::default(), 1.0, true);

        assert_eq!(room.phase(), &Phase::Exploring);
        assert!(room.puzzle.inventory().is_empty());
        assert!(!room.puzzle.escaped());
        assert_eq!(room.player.position, layout.spawn.position);
    }

    #[test]
    fn test_events_drained_each_tick() {
        let mut room = office();
        room.interact_with(&PropId::new("exit_door"));
        assert!(!room.puzzle.events.is_empty());
        room.tick(&InputFrame::default(), 0.016, true);
        assert!(room.puzzle.events.is_empty());
    }
}
