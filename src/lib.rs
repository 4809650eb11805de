#![deny(missing_docs)]

//! Weft: outcomes that merge without losing errors, and node graphs that
//! compose with `+` and `|`.
//!
//! # Outcomes
//!
//! - [`Outcome`]: a success or a failure, with `map`, `flat_map`,
//!   `match_with` and `value_or`
//! - [`merge`] / [`sequence_all`]: combine outcomes into [`Accumulator`]s;
//!   when anything fails the error sequence keeps one slot per input
//! - [`sequence`] / [`sequence!`]: the same over tuples of differently
//!   typed outcomes
//! - [`MergePolicy`]: decides the placeholder error for inputs that
//!   succeeded ([`DefaultMergePolicy`] or a per-call [`Sentinel`])
//!
//! # Graphs
//!
//! - [`Node`]: an atom, a chain (`a + b`) or a branch (`a | b`)
//! - [`Node::construct_connection`]: wires successor links once
//! - [`Node::depth_first`]: walks the wired graph
//!
//! # Errors
//!
//! Domain failures live in [`Outcome::Err`]. Programmer mistakes, such as
//! reading the inactive side of an outcome or using a node id from another
//! graph, are [`ContractViolation`]s: panicking accessors abort with one,
//! `try_*` accessors return it. Serialized graphs that fail validation are
//! rejected with a [`GraphError`].

pub mod error;
pub mod graph;
mod macros;
pub mod merge;
pub mod outcome;
pub mod sequence;

pub use error::{ContractViolation, GraphError};
pub use graph::{
    Connected, GraphState, Link, Node, NodeId, NodeKind, Phase, Successor, Unconnected,
};
pub use merge::{
    merge, merge_errors, sequence_all, Accumulate, Accumulator, DefaultMergePolicy,
    ErrorAccumulator, MergePolicy, OkAccumulator, Sentinel,
};
pub use outcome::{Outcome, Variant};
pub use sequence::{sequence, sequence_with, Sequence};

#[cfg(test)]
mod tests;
