//! Merging independent outcomes into one.
//!
//! Two outcomes are merged by concatenating their payloads into an
//! [`Accumulator`]. A payload that is already an accumulator is spliced in
//! element by element; anything else counts as a single element.
//!
//! When any operand fails, the merged outcome fails and its error sequence
//! keeps one slot per input: successful operands contribute the policy's
//! placeholder error instead of being omitted. Placeholders are
//! indistinguishable from real errors, so pick values (or a [`Sentinel`])
//! that no real failure can produce.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Ordered payloads collected across successive merges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accumulator<T> {
    items: Vec<T>,
}

/// Successes collected by a merge.
pub type OkAccumulator<T> = Accumulator<T>;

/// Errors (and placeholders) collected by a merge.
pub type ErrorAccumulator<E> = Accumulator<E>;

impl<T> Accumulator<T> {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty accumulator with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the slots in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the slots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the accumulator, returning its slots.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Append one element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Concatenate two accumulators, `self` first.
    pub fn concat(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Accumulator<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Accumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Accumulator<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Accumulator<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

/// A payload that can be flattened into an [`Accumulator<T>`].
///
/// Every `T` is one element. An `Accumulator<T>` is spliced, contributing
/// all of its elements in order.
pub trait Accumulate<T> {
    /// Number of slots this payload occupies once flattened.
    fn width(&self) -> usize;

    /// Append this payload's elements to `acc`.
    fn append_to(self, acc: &mut Accumulator<T>);
}

impl<T> Accumulate<T> for T {
    fn width(&self) -> usize {
        1
    }

    fn append_to(self, acc: &mut Accumulator<T>) {
        acc.push(self);
    }
}

impl<T> Accumulate<T> for Accumulator<T> {
    fn width(&self) -> usize {
        self.len()
    }

    fn append_to(self, acc: &mut Accumulator<T>) {
        acc.items.extend(self.items);
    }
}

/// Strategy for combining two outcomes.
///
/// Implementors supply the placeholder error for successful slots; the
/// combination itself has a provided implementation that any policy may
/// override.
pub trait MergePolicy<E> {
    /// The error that stands in for one successful slot.
    fn placeholder(&self) -> E;

    /// Combine `a` and `b` into a single outcome.
    ///
    /// | `a`    | `b`    | result                                         |
    /// |--------|--------|------------------------------------------------|
    /// | `Ok`   | `Ok`   | `Ok(a ++ b)`                                   |
    /// | `Ok`   | `Err`  | `Err(placeholder * width(a) ++ b)`             |
    /// | `Err`  | `Ok`   | `Err(a ++ placeholder * width(b))`             |
    /// | `Err`  | `Err`  | `Err(a ++ b)`                                  |
    fn merge<A, B, T, EA, EB>(
        &self,
        a: Outcome<A, EA>,
        b: Outcome<B, EB>,
    ) -> Outcome<OkAccumulator<T>, ErrorAccumulator<E>>
    where
        A: Accumulate<T>,
        B: Accumulate<T>,
        EA: Accumulate<E>,
        EB: Accumulate<E>,
    {
        match (a, b) {
            (Outcome::Ok(a), Outcome::Ok(b)) => {
                let mut values = Accumulator::with_capacity(a.width() + b.width());
                a.append_to(&mut values);
                b.append_to(&mut values);
                Outcome::Ok(values)
            }
            (Outcome::Ok(a), Outcome::Err(b)) => {
                let mut errors = Accumulator::with_capacity(a.width() + b.width());
                fill(self, &mut errors, a.width());
                b.append_to(&mut errors);
                Outcome::Err(errors)
            }
            (Outcome::Err(a), Outcome::Ok(b)) => {
                let mut errors = Accumulator::with_capacity(a.width() + b.width());
                a.append_to(&mut errors);
                fill(self, &mut errors, b.width());
                Outcome::Err(errors)
            }
            (Outcome::Err(a), Outcome::Err(b)) => Outcome::Err(merge_errors(a, b)),
        }
    }
}

fn fill<E, P>(policy: &P, errors: &mut Accumulator<E>, width: usize)
where
    P: MergePolicy<E> + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(filled = width, offset = errors.len(), "merge.placeholder");

    errors.extend((0..width).map(|_| policy.placeholder()));
}

/// Placeholders are `E::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultMergePolicy;

impl<E: Default> MergePolicy<E> for DefaultMergePolicy {
    fn placeholder(&self) -> E {
        E::default()
    }
}

/// Placeholders are clones of a caller-chosen value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinel<E>(pub E);

impl<E: Clone> MergePolicy<E> for Sentinel<E> {
    fn placeholder(&self) -> E {
        self.0.clone()
    }
}

/// Merge two outcomes under `policy`.
pub fn merge<P, A, B, T, E, EA, EB>(
    policy: &P,
    a: Outcome<A, EA>,
    b: Outcome<B, EB>,
) -> Outcome<OkAccumulator<T>, ErrorAccumulator<E>>
where
    P: MergePolicy<E>,
    A: Accumulate<T>,
    B: Accumulate<T>,
    EA: Accumulate<E>,
    EB: Accumulate<E>,
{
    policy.merge(a, b)
}

/// Concatenate two error payloads, splicing any that are accumulators.
pub fn merge_errors<E, EA, EB>(a: EA, b: EB) -> ErrorAccumulator<E>
where
    EA: Accumulate<E>,
    EB: Accumulate<E>,
{
    let mut errors = Accumulator::with_capacity(a.width() + b.width());
    a.append_to(&mut errors);
    b.append_to(&mut errors);
    errors
}

/// Merge a list of outcomes, folding left to right.
///
/// On success the values come back in input order. If any outcome fails,
/// the error accumulator has exactly one slot per input, with placeholders
/// in the slots that succeeded. An empty list is a success with no values.
pub fn sequence_all<P, I, T, E>(
    policy: &P,
    outcomes: I,
) -> Outcome<OkAccumulator<T>, ErrorAccumulator<E>>
where
    P: MergePolicy<E>,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .fold(Outcome::Ok(Accumulator::new()), |acc, next| {
            policy.merge::<Accumulator<T>, T, T, Accumulator<E>, E>(acc, next)
        })
}
