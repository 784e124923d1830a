//! Pointer lock (cursor grab) for mouse look

use macroquad::prelude::{set_cursor_grab, show_mouse};

/// Tracks whether the cursor is grabbed for first-person look
#[derive(Debug, Default)]
pub struct PointerLock {
    locked: bool,
}

impl PointerLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Apply this frame's requests. `cancel_claimed` means the game used
    /// Escape for something else (closing the code panel).
    ///
    /// Returns the state to apply to the OS cursor, or None when nothing
    /// needs doing. Engaging while already locked returns `Some(true)` again:
    /// the platform may have dropped the grab (focus loss in the browser)
    /// without telling us.
    pub fn update(&mut self, engage: bool, cancel: bool, cancel_claimed: bool) -> Option<bool> {
        let next = if engage {
            true
        } else if self.locked && cancel && !cancel_claimed {
            false
        } else {
            return None;
        };

        self.locked = next;
        Some(next)
    }

    /// Grab or release the OS cursor to match the lock state
    pub fn apply(&self) {
        set_cursor_grab(self.locked);
        show_mouse(!self.locked);
        tracing::debug!("Pointer lock {}", if self.locked { "engaged" } else { "released" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_locks() {
        let mut lock = PointerLock::new();
        assert_eq!(lock.update(true, false, false), Some(true));
        assert!(lock.is_locked());
    }

    #[test]
    fn test_escape_releases() {
        let mut lock = PointerLock::new();
        lock.update(true, false, false);
        assert_eq!(lock.update(false, true, false), Some(false));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_claimed_escape_keeps_lock() {
        let mut lock = PointerLock::new();
        lock.update(true, false, false);
        assert_eq!(lock.update(false, true, true), None);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_click_while_locked_regrabs() {
        let mut lock = PointerLock::new();
        lock.update(true, false, false);
        assert_eq!(lock.update(true, false, false), Some(true));
        assert!(lock.is_locked());
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let mut lock = PointerLock::new();
        assert_eq!(lock.update(false, false, false), None);
        lock.update(true, false, false);
        assert_eq!(lock.update(false, false, false), None);
        assert!(lock.is_locked());
    }
}
