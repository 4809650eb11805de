//! Macros for sequencing outcomes.
//!
//! - `sequence!`: merge any number of outcomes into one, tuple-shaped
//! - `impl_sequence!`: crate-internal generator for the tuple `Sequence` impls

/// Merge several outcomes into one.
///
/// Expands to [`Sequence::sequence`](crate::Sequence::sequence) over a tuple
/// of the arguments. Without a policy, [`DefaultMergePolicy`](crate::DefaultMergePolicy)
/// supplies `Default::default()` for the error slot of every input that
/// succeeded.
///
/// ```
/// use weft::{sequence, Outcome, Sentinel};
///
/// let merged = sequence!(
///     Outcome::<&str, i32>::Ok("aaa"),
///     Outcome::<i32, bool>::Ok(1),
///     Outcome::<&str, String>::Err("err".to_string()),
/// );
/// assert_eq!(merged, Outcome::Err((0, false, "err".to_string())));
///
/// let merged = sequence!(policy = Sentinel(-1); Outcome::<u8, i32>::Ok(1), Outcome::<u8, i32>::Err(7));
/// assert_eq!(merged, Outcome::Err((-1, 7)));
/// ```
#[macro_export]
macro_rules! sequence {
    (policy = $policy:expr; $($outcome:expr),+ $(,)?) => {
        $crate::Sequence::sequence(($($outcome,)+), &$policy)
    };
    ($($outcome:expr),+ $(,)?) => {
        $crate::Sequence::sequence(($($outcome,)+), &$crate::DefaultMergePolicy)
    };
}

/// Implement `Sequence` for one tuple arity.
///
/// Each entry names the value type, the error type and a binding for one
/// position of the tuple.
macro_rules! impl_sequence {
    ($(($value:ident, $error:ident, $slot:ident)),+) => {
        impl<Policy, $($value, $error),+> $crate::sequence::Sequence<Policy>
            for ($($crate::outcome::Outcome<$value, $error>,)+)
        where
            $(Policy: $crate::merge::MergePolicy<$error>,)+
        {
            type Output = $crate::outcome::Outcome<($($value,)+), ($($error,)+)>;

            fn sequence(self, policy: &Policy) -> Self::Output {
                let ($($slot,)+) = self;
                if $($slot.is_ok())&&+ {
                    $crate::outcome::Outcome::Ok(($($slot.into_value(),)+))
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        width = [$($slot.is_ok()),+].len(),
                        failed = [$($slot.is_err()),+].iter().filter(|failed| **failed).count(),
                        "sequence.failed"
                    );

                    $crate::outcome::Outcome::Err(($(
                        $slot.into_error_or_else(|| {
                            $crate::sequence::placeholder::<Policy, $error>(policy)
                        }),
                    )+))
                }
            }
        }
    };
}

pub(crate) use impl_sequence;
