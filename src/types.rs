use typenum::{consts::*, Unsigned};

/// The deepest key tuple a tree will hold.
pub(crate) type MaxArity = U16;

pub(crate) const MAX_ARITY: usize = <MaxArity as Unsigned>::USIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    // A new leaf was created for the tuple.
    Added,
    // The tuple already held a value, which was left alone.
    Occupied,
}

impl InsertResult {
    /// The change this insertion makes to every count on its path.
    pub(crate) fn delta(self) -> isize {
        match self {
            InsertResult::Added => 1,
            InsertResult::Occupied => 0,
        }
    }

    pub(crate) fn is_added(self) -> bool {
        self == InsertResult::Added
    }
}
