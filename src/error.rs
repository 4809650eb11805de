//! Errors outside the domain.
//!
//! Domain failures never use these types; they travel inside
//! [`Outcome::Err`](crate::Outcome::Err).
//!
//! - [`ContractViolation`]: the caller broke a precondition and must fix
//!   the calling code
//! - [`GraphError`]: serialized graph input that fails validation

use crate::graph::{NodeId, NodeKind, Phase};
use crate::outcome::Variant;

/// A broken precondition detected at runtime.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// An accessor was used on the variant it does not cover.
    #[error("invalid variant access: expected {expected:?}, found {found:?}")]
    BadVariantAccess {
        /// The variant the accessor requires.
        expected: Variant,
        /// The variant that is actually active.
        found: Variant,
    },

    /// A node index outside the arena of the graph it was used with.
    #[error("node {id} is out of range for a graph of {node_num} nodes")]
    UnknownNode {
        /// The offending index.
        id: NodeId,
        /// Number of atomic nodes in the graph.
        node_num: usize,
    },
}

/// A serialized graph that does not describe a graph `+`, `|` and
/// [`construct_connection`](crate::Node::construct_connection) could have built.
///
/// Returned (through the deserializer's error) when reading a [`Node`](crate::Node).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph was saved in the other phase.
    #[error("graph was saved {found:?}, expected {expected:?}")]
    WrongPhase {
        /// The phase of the target type.
        expected: Phase,
        /// The phase recorded in the input.
        found: Phase,
    },

    /// A chain or branch with fewer than two children.
    #[error("{kind:?} has {children} children, at least two are required")]
    TooFewChildren {
        /// Chain or branch.
        kind: NodeKind,
        /// Number of children found.
        children: usize,
    },

    /// A chain directly inside a chain, or a branch inside a branch.
    #[error("{kind:?} nested directly inside another {kind:?}")]
    NestedComposite {
        /// Chain or branch.
        kind: NodeKind,
    },

    /// An index outside the arena, in the structure or in a link.
    #[error("node {id} is out of range for a graph of {node_num} nodes")]
    UnknownNode {
        /// The offending index.
        id: NodeId,
        /// Number of atomic nodes in the graph.
        node_num: usize,
    },

    /// An atom referenced twice by the structure.
    #[error("node {id} appears more than once in the structure")]
    DuplicateNode {
        /// The repeated index.
        id: NodeId,
    },

    /// An atom the structure never references.
    #[error("node {id} is not part of the structure")]
    DetachedNode {
        /// The unreferenced index.
        id: NodeId,
    },

    /// A link that differs from what wiring the structure produces.
    #[error("link of node {id} does not match the structure")]
    LinkMismatch {
        /// The atom holding the link.
        id: NodeId,
    },
}
