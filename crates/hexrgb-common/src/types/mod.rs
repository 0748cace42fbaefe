mod channel;
mod color;

pub use channel::*;
pub use color::*;
