//! HUD Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Overlay Colors
// =============================================================================

/// Translucent panel behind HUD text
pub const PANEL_BG: Color = Color::new(0.0, 0.0, 0.0, 0.7);

/// Code entry panel border
pub const PANEL_BORDER: Color = Color::new(0.3, 0.5, 0.8, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.95, 0.95, 0.95, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.6, 0.6, 0.65, 1.0);

/// Terminal-style input text
pub const CODE_TEXT: Color = Color::new(0.4, 1.0, 0.5, 1.0);

/// Escape banner
pub const SUCCESS_COLOR: Color = Color::new(0.95, 0.8, 0.3, 1.0);

/// Crosshair, slightly brighter when a prop is focused
pub const CROSSHAIR: Color = Color::new(1.0, 1.0, 1.0, 0.6);
pub const CROSSHAIR_FOCUS: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Edges of the focused prop
pub const FOCUS_OUTLINE: Color = Color::new(1.0, 0.95, 0.6, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Banner text size
pub const FONT_SIZE_BANNER: f32 = 48.0;

/// Prompt and panel text size
pub const FONT_SIZE_CONTENT: f32 = 22.0;

/// Inventory and hint text size
pub const FONT_SIZE_SMALL: f32 = 18.0;
