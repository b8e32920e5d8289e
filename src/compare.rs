use crate::dictionary::CurriedDictionary;
use std::{
    fmt::{Debug, Display, Formatter},
    ops::ControlFlow,
};
use tracing::debug;

/// The outcome of comparing two dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    is_equal: bool,
    message: String,
}

impl Comparison {
    fn equal(message: String) -> Self {
        Comparison {
            is_equal: true,
            message,
        }
    }

    fn unequal(message: String) -> Self {
        debug!(%message, "dictionaries differ");
        Comparison {
            is_equal: false,
            message,
        }
    }

    pub fn is_equal(&self) -> bool {
        self.is_equal
    }

    /// What was found: confirmation of equality, or the first difference.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Compare two dictionaries structurally, using `is_equal` on values.
///
/// The dictionaries are equal when they have the same arity, hold the same
/// number of key tuples, and every tuple of `left` is found in `right` with
/// a value `is_equal` accepts. Equal counts mean no tuple of `right` can be
/// missing from `left`.
///
/// On a mismatch the message describes the first one found while walking
/// `left`. Which one that is depends on the child map's iteration order: with
/// [`Ordered`](crate::Ordered) it's the lowest mismatching tuple.
pub fn compare<A, B, F>(left: &A, right: &B, is_equal: F) -> Comparison
where
    A: CurriedDictionary,
    B: CurriedDictionary<Key = A::Key>,
    A::Key: Debug,
    A::Value: Debug,
    B::Value: Debug,
    F: Fn(&A::Value, &B::Value) -> bool,
{
    if left.arity() != right.arity() {
        return Comparison::unequal(format!(
            "Arity mismatch: left has arity {}, right has arity {}",
            left.arity(),
            right.arity()
        ));
    }
    if left.count() != right.count() {
        return Comparison::unequal(format!(
            "Count mismatch: left holds {} key tuples, right holds {}",
            left.count(),
            right.count()
        ));
    }
    let mut mismatch = None;
    let _ = left.for_each_entry(|keys, value| {
        let found = right.with_value(keys, |other| {
            if is_equal(value, other) {
                None
            } else {
                Some(format!("{:?}", other))
            }
        });
        let other = match found {
            Ok(None) => return ControlFlow::Continue(()),
            Ok(Some(other)) => other,
            Err(_) => "not found".to_string(),
        };
        mismatch = Some(format!(
            "Mismatch at key tuple {:?}: left = {:?}, right = {}",
            keys, value, other
        ));
        ControlFlow::Break(())
    });
    match mismatch {
        Some(message) => Comparison::unequal(message),
        None => Comparison::equal(format!(
            "Dictionaries are equal: {} key tuples match",
            left.count()
        )),
    }
}
