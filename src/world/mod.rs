//! World module - static room layouts
//!
//! A layout is pure data: rooms (floor/ceiling volumes), walls and props.
//! Everything the puzzle system can touch is a prop; walls only block
//! movement and rays.
//!
//! - `layout` - the data types and lookups
//! - `loader` - RON loading/saving with validation
//! - `builtin` - layouts compiled into the binary

mod builtin;
mod layout;
mod loader;

pub use builtin::*;
pub use layout::*;
pub use loader::*;
