//! Atomic nodes and their successor links.

use serde::{Deserialize, Serialize};

/// Index of an atomic node inside the arena of one composed graph.
///
/// Ids are only meaningful for the graph that handed them out. Composition
/// renumbers the right-hand operand, so ids taken from an operand before a
/// `+` or `|` must not be used with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    pub const fn index(self) -> usize {
        self.0
    }

    pub(crate) const fn offset(self, by: usize) -> Self {
        Self(self.0 + by)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The successor an exit node has been composed against.
///
/// Set during composition by
/// [`copy_with_successor`](crate::graph::Node::copy_with_successor); turned
/// into a concrete [`Link`] by
/// [`construct_connection`](crate::graph::Node::construct_connection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Successor {
    /// No successor; the node ends every path through it.
    #[default]
    Terminal,
    /// Exactly one successor node.
    Single,
    /// A set of alternative successors of the given size.
    Fanout(usize),
}

impl Successor {
    /// The successor shape needed to reach an entry set of `entries` nodes.
    pub const fn for_entries(entries: usize) -> Self {
        match entries {
            0 => Self::Terminal,
            1 => Self::Single,
            n => Self::Fanout(n),
        }
    }

    /// Number of successor nodes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Terminal => 0,
            Self::Single => 1,
            Self::Fanout(n) => n,
        }
    }
}

/// A wired successor pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Link {
    /// The canonical terminal marker.
    #[default]
    Terminal,
    /// One successor.
    Node(NodeId),
    /// Alternative successors, in structural order.
    Fork(Vec<NodeId>),
}

impl Link {
    /// Returns `true` for the terminal marker.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// The successor ids, empty for the terminal marker.
    pub fn targets(&self) -> &[NodeId] {
        match self {
            Self::Terminal => &[],
            Self::Node(id) => std::slice::from_ref(id),
            Self::Fork(ids) => ids,
        }
    }

    pub(crate) fn resolve(successor: Successor, entries: Vec<NodeId>) -> Self {
        debug_assert_eq!(successor.arity(), entries.len());
        match successor {
            Successor::Terminal => Self::Terminal,
            Successor::Single => entries.first().copied().map_or(Self::Terminal, Self::Node),
            Successor::Fanout(_) => Self::Fork(entries),
        }
    }

    fn offset(&mut self, by: usize) {
        match self {
            Self::Terminal => {}
            Self::Node(id) => *id = id.offset(by),
            Self::Fork(ids) => ids.iter_mut().for_each(|id| *id = id.offset(by)),
        }
    }
}

/// The smallest composable unit: one payload and one successor link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom<P> {
    payload: P,
    successor: Successor,
    link: Link,
    visited: bool,
}

impl<P> Atom<P> {
    pub(crate) fn new(payload: P) -> Self {
        Self {
            payload,
            successor: Successor::Terminal,
            link: Link::Terminal,
            visited: false,
        }
    }

    /// The user payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access to the user payload.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// The successor this node was composed against.
    ///
    /// Wiring follows it only where the node precedes another element of a
    /// chain; see [`Node::copy_with_successor`](crate::Node::copy_with_successor).
    pub fn successor(&self) -> Successor {
        self.successor
    }

    /// The wired successor pointer. Always [`Link::Terminal`] before the
    /// graph is connected.
    pub fn link(&self) -> &Link {
        &self.link
    }

    /// Whether a traversal has already passed through this node.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_successor(&mut self, successor: Successor) {
        self.successor = successor;
    }

    pub(crate) fn set_link(&mut self, link: Link) {
        self.link = link;
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn offset(&mut self, by: usize) {
        self.link.offset(by);
    }
}
