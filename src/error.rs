use thiserror::Error;

/// The broad class an [`Error`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed something the operation can't accept.
    InvalidArgument,
    /// A lookup addressed a key tuple that isn't stored.
    NotFound,
}

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key tuple had the wrong number of keys for the node it was given to
    #[error("Incorrect arity: expected {expected} keys, got {actual}")]
    IncorrectArity { expected: usize, actual: usize },

    /// A prefix had more keys than the node has levels
    #[error("Prefix of {length} keys is longer than arity {arity}")]
    PrefixTooLong { arity: usize, length: usize },

    /// No value is stored at the requested key tuple
    #[error("Key tuple not found: no entry for the key at position {position}")]
    NotFound { position: usize },

    /// Partial application ran into a key with no child node
    #[error("Missing key in prefix: {key} at position {position}")]
    MissingPrefixKey { position: usize, key: String },

    /// A count delta would have taken a running count below zero
    #[error("Count underflow: applying {delta} to {count}")]
    CountUnderflow { count: usize, delta: isize },

    /// A magnitude was built from a negative integer
    #[error("Negative magnitude: {value}")]
    NegativeMagnitude { value: i64 },

    /// An arity exceeded the deepest tree this crate supports
    #[error("Arity {arity} is larger than the maximum of {max}")]
    ArityTooLarge { arity: usize, max: usize },

    /// An empty branch was requested with no keys to branch on
    #[error("A node of arity 0 holds a value and must be built with Node::leaf")]
    NullaryBranch,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
