//! Game Module
//!
//! Everything that happens once a layout is loaded:
//!
//! - controller: first-person movement with damped velocity
//! - collision: all-or-nothing box moves against walls, solid props and shut doors
//! - interaction: picking the prop under the crosshair
//! - puzzle: per-prop state, inventory and the interaction rules
//! - prompt: the timed overlay message
//! - event: transitions reported by the puzzle
//! - runtime: the per-frame driver tying the above together
//! - renderer: macroquad drawing of the room and HUD
//!
//! Only the renderer talks to macroquad; the rest is plain data and runs
//! headless in tests.

pub mod collision;
pub mod controller;
pub mod event;
pub mod interaction;
pub mod prompt;
pub mod puzzle;
pub mod renderer;
pub mod runtime;

// Re-export main types
pub use renderer::draw_frame;
pub use runtime::EscapeRoom;
