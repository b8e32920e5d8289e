#![allow(unreachable_pub)] // pub exports below erroneously complain without this

use crate::config::MapConfig;
use std::{
    fmt::{Debug, Error, Formatter},
    iter::FusedIterator,
};

mod ref_iter;
pub use ref_iter::Iter;

/// The key tuples stored under a node.
pub struct Keys<'a, K, V, C>
where
    C: MapConfig<K>,
{
    iter: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Keys<'a, K, V, C>
where
    C: MapConfig<K>,
{
    pub(crate) fn new(iter: Iter<'a, K, V, C>) -> Self {
        Keys { iter }
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    type Item = Vec<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(keys, _)| keys)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C> ExactSizeIterator for Keys<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> FusedIterator for Keys<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> Debug for Keys<'a, K, V, C>
where
    C: MapConfig<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Keys({:?})", self.iter)
    }
}

/// The values stored under a node.
pub struct Values<'a, K, V, C>
where
    C: MapConfig<K>,
{
    iter: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Values<'a, K, V, C>
where
    C: MapConfig<K>,
{
    pub(crate) fn new(iter: Iter<'a, K, V, C>) -> Self {
        Values { iter }
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C> ExactSizeIterator for Values<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> FusedIterator for Values<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> Debug for Values<'a, K, V, C>
where
    C: MapConfig<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Values({:?})", self.iter)
    }
}
