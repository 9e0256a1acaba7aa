mod advance;
mod const_view;
mod cursor;
mod hash;

pub use advance::*;
pub use const_view::*;
pub use cursor::*;
pub use hash::*;
