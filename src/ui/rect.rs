//! Rectangle type for HUD layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// A `w` x `h` box centred inside this one
    pub fn centered(&self, w: f32, h: f32) -> Self {
        Self::new(self.center_x() - w * 0.5, self.center_y() - h * 0.5, w, h)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let screen = Rect::screen(800.0, 600.0);
        let panel = screen.centered(200.0, 100.0);
        assert_eq!(panel, Rect::new(300.0, 250.0, 200.0, 100.0));
        assert_eq!(panel.right(), 500.0);
        assert_eq!(panel.bottom(), 350.0);
    }

    #[test]
    fn test_pad_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).pad(8.0);
        assert_eq!(r.w, 0.0);
        assert_eq!(r.h, 0.0);
    }
}
