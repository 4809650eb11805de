//! The `Outcome` tagged union and its combinators.
//!
//! An [`Outcome`] is either a success value or a failure value. Its tag is
//! fixed at construction; the payload may be mutated in place. Accessing the
//! inactive side is a [`ContractViolation`], not a domain failure.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// Which side of an [`Outcome`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// The success side.
    Ok,
    /// The failure side.
    Err,
}

/// A success value of type `T` or a failure value of type `E`.
///
/// Unlike `std::result::Result`, the combinators here mirror the merge
/// machinery in [`crate::merge`]: failures are never discarded, they are
/// forwarded, transformed, or merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E = String> {
    /// Success payload.
    Ok(T),
    /// Failure payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Construct an outcome in the success state.
    pub const fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Construct an outcome in the failure state.
    pub const fn failure(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the success side is active.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the failure side is active.
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The active side.
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Ok(_) => Variant::Ok,
            Self::Err(_) => Variant::Err,
        }
    }

    /// Borrow the success value, or report which side is active instead.
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(ContractViolation::BadVariantAccess {
                expected: Variant::Ok,
                found: Variant::Err,
            }),
        }
    }

    /// Borrow the failure value, or report which side is active instead.
    pub fn try_error(&self) -> Result<&E, ContractViolation> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Ok(_) => Err(ContractViolation::BadVariantAccess {
                expected: Variant::Err,
                found: Variant::Ok,
            }),
        }
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::BadVariantAccess`] if the outcome is a
    /// failure. Check [`is_ok`](Self::is_ok) first or use
    /// [`match_with`](Self::match_with).
    pub fn get_value(&self) -> &T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => bad_access(Variant::Ok),
        }
    }

    /// Mutably borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn get_value_mut(&mut self) -> &mut T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => bad_access(Variant::Ok),
        }
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => bad_access(Variant::Ok),
        }
    }

    /// Borrow the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn get_error(&self) -> &E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => bad_access(Variant::Err),
        }
    }

    /// Mutably borrow the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn get_error_mut(&mut self) -> &mut E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => bad_access(Variant::Err),
        }
    }

    /// Take the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn into_error(self) -> E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => bad_access(Variant::Err),
        }
    }

    /// Return the success value, or the result of `fallback` on failure.
    ///
    /// `fallback` is only invoked when the outcome is a failure.
    pub fn value_or<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback(),
        }
    }

    /// Take the failure value, or produce a stand-in for a success.
    ///
    /// Used by the sequencing machinery to fill successful slots.
    pub(crate) fn into_error_or_else<F>(self, fill: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => fill(),
        }
    }

    /// Transform the success value, moving a failure through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the success value of a retained outcome.
    ///
    /// The failure side is cloned through rather than recomputed.
    pub fn map_ref<U, F>(&self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(&T) -> U,
        E: Clone,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }

    /// Transform the failure value, moving a success through untouched.
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chain a computation that itself produces an outcome.
    ///
    /// On failure `f` is not called and the failure is returned as is. On
    /// success the outcome returned by `f` is returned directly, so nested
    /// outcomes never accumulate.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// [`flat_map`](Self::flat_map) on a retained outcome.
    pub fn flat_map_ref<U, F>(&self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(&T) -> Outcome<U, E>,
        E: Clone,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }

    /// Dispatch to exactly one of two branches based on the active side.
    pub fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Borrow both sides.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrow both sides.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The failure value, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Convert into a standard `Result` so that `?` can be used.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

#[cold]
#[track_caller]
fn bad_access(expected: Variant) -> ! {
    let found = match expected {
        Variant::Ok => Variant::Err,
        Variant::Err => Variant::Ok,
    };
    panic!("{}", ContractViolation::BadVariantAccess { expected, found })
}
