use crate::{error::Error, types::MAX_ARITY};
use std::fmt::{Display, Formatter};

/// The number of keys it takes to address a value in a node.
///
/// Always between zero and the deepest supported tree, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Arity(usize);

impl Arity {
    /// The arity of a leaf.
    pub const NULLARY: Arity = Arity(0);

    /// The largest arity a node may have.
    pub const MAX: Arity = Arity(MAX_ARITY);

    pub fn new(arity: usize) -> Result<Self, Error> {
        if arity > MAX_ARITY {
            Err(Error::ArityTooLarge {
                arity,
                max: MAX_ARITY,
            })
        } else {
            Ok(Arity(arity))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_nullary(self) -> bool {
        self.0 == 0
    }

    /// The arity of a child of a node with this arity.
    pub(crate) fn predecessor(self) -> Arity {
        debug_assert!(self.0 > 0);
        Arity(self.0 - 1)
    }
}

impl TryFrom<usize> for Arity {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Arity::new(value)
    }
}

impl TryFrom<i64> for Arity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = usize::try_from(value).map_err(|_| Error::NegativeMagnitude { value })?;
        Arity::new(value)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> Self {
        arity.0
    }
}

impl PartialEq<usize> for Arity {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of key tuples stored under a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Count(usize);

impl Count {
    pub const ZERO: Count = Count(0);
    pub const ONE: Count = Count(1);

    pub fn get(self) -> usize {
        self.0
    }

    /// Shift the count by `delta`, refusing to go below zero.
    pub fn apply(self, delta: isize) -> Result<Count, Error> {
        self.0
            .checked_add_signed(delta)
            .map(Count)
            .ok_or(Error::CountUnderflow {
                count: self.0,
                delta,
            })
    }
}

impl TryFrom<i64> for Count {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Count)
            .map_err(|_| Error::NegativeMagnitude { value })
    }
}

impl From<usize> for Count {
    fn from(count: usize) -> Self {
        Count(count)
    }
}

impl From<Count> for usize {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl PartialEq<usize> for Count {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
