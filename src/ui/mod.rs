//! HUD building blocks
//!
//! Immediate mode: nothing here is retained between frames except the code
//! entry buffer, which the runtime owns.

mod code_entry;
mod rect;
mod text;
mod theme;

pub use code_entry::*;
pub use rect::*;
pub use text::*;
pub use theme::*;
