//! Integration-style tests for outcomes and graphs.
//!
//! ## Test Organization
//!
//! - `common`: Shared fixtures (validation outcomes, stage payloads, graphs)
//! - `outcome`: Combinator behaviour of a single outcome
//! - `sequencing`: Merging and sequencing several outcomes
//! - `graph`: Composition, wiring and traversal of node graphs
//! - `laws`: Property tests for the algebraic laws
//! - `serialization`: serde round trips of outcomes and connected graphs
//!
//! ## Test Domain
//!
//! Outcomes validate parts of a signup form (`name`, `age`, `email`), so that
//! the positional error slots are easy to read. Graphs carry `Stage`
//! payloads whose `value` is what the traversal checks.

mod common;

mod sequencing;
