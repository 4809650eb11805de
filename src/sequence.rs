//! Variadic sequencing over tuples of outcomes.
//!
//! [`sequence_all`](crate::merge::sequence_all) needs every input to share
//! one value type and one error type. Tuples lift that restriction: each
//! position keeps its own types, and the merged error is a tuple with one
//! slot per input.

use crate::merge::{DefaultMergePolicy, MergePolicy};

/// A fixed-size group of outcomes that can be merged into one.
///
/// Implemented for tuples of one to eight [`Outcome`](crate::Outcome)s. The result is `Ok`
/// with a tuple of every value when all inputs succeed. Otherwise it is
/// `Err` with a tuple of every error, where each successful position holds
/// `policy`'s placeholder for that position's error type.
pub trait Sequence<P> {
    /// The merged outcome.
    type Output;

    /// Merge every outcome under `policy`.
    fn sequence(self, policy: &P) -> Self::Output;
}

crate::macros::impl_sequence!((A, EA, a));
crate::macros::impl_sequence!((A, EA, a), (B, EB, b));
crate::macros::impl_sequence!((A, EA, a), (B, EB, b), (C, EC, c));
crate::macros::impl_sequence!((A, EA, a), (B, EB, b), (C, EC, c), (D, ED, d));
crate::macros::impl_sequence!(
    (A, EA, a),
    (B, EB, b),
    (C, EC, c),
    (D, ED, d),
    (F, EF, f)
);
crate::macros::impl_sequence!(
    (A, EA, a),
    (B, EB, b),
    (C, EC, c),
    (D, ED, d),
    (F, EF, f),
    (G, EG, g)
);
crate::macros::impl_sequence!(
    (A, EA, a),
    (B, EB, b),
    (C, EC, c),
    (D, ED, d),
    (F, EF, f),
    (G, EG, g),
    (H, EH, h)
);
crate::macros::impl_sequence!(
    (A, EA, a),
    (B, EB, b),
    (C, EC, c),
    (D, ED, d),
    (F, EF, f),
    (G, EG, g),
    (H, EH, h),
    (I, EI, i)
);

/// Merge a tuple of outcomes, filling successful error slots with
/// `Default::default()`.
pub fn sequence<S>(outcomes: S) -> S::Output
where
    S: Sequence<DefaultMergePolicy>,
{
    outcomes.sequence(&DefaultMergePolicy)
}

/// Merge a tuple of outcomes under an explicit policy.
pub fn sequence_with<P, S>(policy: &P, outcomes: S) -> S::Output
where
    S: Sequence<P>,
{
    outcomes.sequence(policy)
}

/// Placeholder for one slot of a tuple sequence.
///
/// Spelled out as a function so the generated impls can name the error
/// type of each position.
pub(crate) fn placeholder<P, E>(policy: &P) -> E
where
    P: MergePolicy<E>,
{
    policy.placeholder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Sentinel;
    use crate::outcome::Outcome;

    #[test]
    fn single_outcome_is_wrapped() {
        let merged = sequence((Outcome::<i32, String>::Ok(5),));
        assert_eq!(merged, Outcome::Ok((5,)));
    }

    #[test]
    fn pair_with_sentinel() {
        let merged = sequence_with(
            &Sentinel(-1),
            (Outcome::<&str, i32>::Err(4), Outcome::<&str, i32>::Ok("b")),
        );
        assert_eq!(merged, Outcome::Err((4, -1)));
    }
}
