//! Logical command channels

use std::fmt;

/// One port/parser/response pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `led<N> <action>` commands, answered with `OK`
    Actuation,

    /// `read gpio<c> <N>` queries, answered with the pin state
    Query,
}

impl Channel {
    /// Both channels, in the order they are served within an iteration
    pub const ALL: [Channel; 2] = [Channel::Actuation, Channel::Query];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Actuation => "actuation",
            Channel::Query => "query",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
