//! Input handling with gamepad support
//!
//! Polls keyboard, mouse and gamepad once per frame and folds them into an
//! `InputFrame`: four movement flags, an interact trigger, look deltas and
//! code-entry keystrokes. Game logic only ever sees `InputFrame`, so it can
//! be driven from tests without a window.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: keyboard and mouse only

mod actions;
mod gamepad;
mod pointer;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use pointer::PointerLock;
pub use state::*;
