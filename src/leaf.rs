use std::fmt::{Debug, Error, Formatter};

/// A leaf node holds the single value stored at the end of a key tuple.
///
/// There is no way to replace the value once the leaf exists.
pub(crate) struct Leaf<V> {
    value: V,
}

impl<V> Leaf<V> {
    pub(crate) fn new(value: V) -> Self {
        Leaf { value }
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }
}

impl<V> Debug for Leaf<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Leaf({:?})", self.value)
    }
}
