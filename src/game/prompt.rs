//! Overlay prompt: one message at a time, shown for a fixed duration

/// Seconds over which a prompt fades out before disappearing
pub const FADE_SECONDS: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct PromptState {
    message: Option<String>,
    remaining: f32,
    duration: f32,
}

impl PromptState {
    pub fn new(duration: f32) -> Self {
        Self {
            message: None,
            remaining: 0.0,
            duration,
        }
    }

    /// Replace the current message and restart the timer
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.remaining = self.duration;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.message.is_none() {
            return;
        }
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.message = None;
            self.remaining = 0.0;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// 1.0 while fully shown, ramping to 0.0 over the last `FADE_SECONDS`
    pub fn opacity(&self) -> f32 {
        if self.message.is_none() {
            return 0.0;
        }
        (self.remaining / FADE_SECONDS).clamp(0.0, 1.0)
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.remaining = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_for_duration() {
        let mut prompt = PromptState::new(3.0);
        prompt.show("hello");
        prompt.tick(2.9);
        assert_eq!(prompt.current(), Some("hello"));
        prompt.tick(0.2);
        assert_eq!(prompt.current(), None);
    }

    #[test]
    fn test_show_restarts_timer() {
        let mut prompt = PromptState::new(3.0);
        prompt.show("first");
        prompt.tick(2.5);
        prompt.show("second");
        prompt.tick(2.5);
        assert_eq!(prompt.current(), Some("second"));
    }

    #[test]
    fn test_fade() {
        let mut prompt = PromptState::new(3.0);
        assert_eq!(prompt.opacity(), 0.0);
        prompt.show("fading");
        assert_eq!(prompt.opacity(), 1.0);
        prompt.tick(2.875);
        assert!((prompt.opacity() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_clear() {
        let mut prompt = PromptState::new(3.0);
        prompt.show("gone");
        prompt.clear();
        assert_eq!(prompt.current(), None);
    }
}
