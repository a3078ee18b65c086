//! Strongly-typed identifiers.

use std::fmt;

/// Identifies one of the two agents sharing a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentId {
    /// The first agent.
    A,
    /// The second agent.
    B,
}

impl AgentId {
    /// The other agent.
    pub fn partner(self) -> AgentId {
        match self {
            AgentId::A => AgentId::B,
            AgentId::B => AgentId::A,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentId::A => write!(f, "A"),
            AgentId::B => write!(f, "B"),
        }
    }
}

/// Index of a node within its owning graph's arena.
///
/// Ids are issued in discovery order and stay valid for the lifetime of
/// the graph — nodes are only ever added, never removed. An id is only
/// meaningful to the graph that issued it; graphs never share nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The arena slot this id addresses.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
