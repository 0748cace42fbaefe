use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three intensity components of an [`Rgb`](super::Rgb) color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in encoding order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}
