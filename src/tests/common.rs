//! Common fixtures for tests.
//!
//! This module contains:
//! - `FieldError`: Error type for form validation
//! - Validators producing `Outcome`s: `validate_name`, `validate_age`, `validate_email`
//! - `Stage`: Graph payload with a label and a checked value
//! - The reference topologies `n1` to `n5`

use serde::{Deserialize, Serialize};

use crate::graph::{Connected, Node};
use crate::Outcome;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by the form validators.
#[derive(thiserror::Error, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldError {
    /// Placeholder for a field that validated fine.
    #[default]
    #[error("no error")]
    Valid,

    /// The field was empty.
    #[error("missing")]
    Missing,

    /// The field was present but malformed.
    #[error("invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// Validators
// ============================================================================

pub fn validate_name(name: &str) -> Outcome<String, FieldError> {
    if name.trim().is_empty() {
        Outcome::failure(FieldError::Missing)
    } else {
        Outcome::success(name.trim().to_string())
    }
}

pub fn validate_age(age: i64) -> Outcome<u8, FieldError> {
    match u8::try_from(age) {
        Ok(age) if age >= 18 => Outcome::success(age),
        _ => Outcome::failure(FieldError::Invalid(format!("age {age}"))),
    }
}

pub fn validate_email(email: &str) -> Outcome<String, FieldError> {
    if email.is_empty() {
        Outcome::failure(FieldError::Missing)
    } else if email.contains('@') {
        Outcome::success(email.to_string())
    } else {
        Outcome::failure(FieldError::Invalid(email.to_string()))
    }
}

// ============================================================================
// Graph Payload
// ============================================================================

/// A step in a composed graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Human readable label.
    pub phrase: String,
    /// The value a traversal checks.
    pub value: i32,
}

/// An atomic node holding `Stage { value, .. }`.
pub fn stage(value: i32) -> Node<Stage> {
    Node::atom(Stage {
        phrase: format!("stage-{value}"),
        value,
    })
}

/// Values of a connected graph in depth-first order.
pub fn walk(graph: &mut Node<Stage, Connected>) -> Vec<i32> {
    graph
        .depth_first_payloads()
        .into_iter()
        .map(|stage| stage.value)
        .collect()
}

// ============================================================================
// Reference Topologies
// ============================================================================

/// `1 + (2 + 3)`
pub fn n1() -> Node<Stage> {
    stage(1) + (stage(2) + stage(3))
}

/// `(6 + 5) + 4`
pub fn n2() -> Node<Stage> {
    (stage(6) + stage(5)) + stage(4)
}

/// `(7 + 8) + (9 | 10)`
pub fn n3() -> Node<Stage> {
    (stage(7) + stage(8)) + (stage(9) | stage(10))
}

/// `n1 + (11 | n3 | 12) + n2`
pub fn n4() -> Node<Stage> {
    n1() + (stage(11) | n3() | stage(12)) + n2()
}

/// `(11 | n3 | 12) + n2`
pub fn n5() -> Node<Stage> {
    (stage(11) | n3() | stage(12)) + n2()
}
