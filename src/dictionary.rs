use crate::{
    config::MapConfig,
    error::Error,
    magnitude::{Arity, Count},
    node::Node,
};
use std::{fmt::Debug, ops::ControlFlow};

/// Read access to anything that behaves like a curried map.
///
/// This is the seam the comparison engine and [`Wrapped`](crate::Wrapped)
/// work through, so a view over a node can stand in for the node itself.
pub trait CurriedDictionary {
    type Key;
    type Value;

    /// What partial application hands back.
    type Curried<'a>: CurriedDictionary<Key = Self::Key, Value = Self::Value>
    where
        Self: 'a;

    fn arity(&self) -> Arity;

    fn count(&self) -> Count;

    fn contains_key_tuple(&self, keys: &[Self::Key]) -> Result<bool, Error>;

    fn contains_key_tuple_prefix(&self, prefix: &[Self::Key]) -> Result<bool, Error>;

    /// Look up the value at `keys` and pass it to `f`.
    fn with_value<R, F>(&self, keys: &[Self::Key], f: F) -> Result<R, Error>
    where
        F: FnOnce(&Self::Value) -> R;

    /// Call `f` with every stored key tuple and its value, stopping early if
    /// `f` breaks.
    fn for_each_entry<F>(&self, f: F) -> ControlFlow<()>
    where
        F: FnMut(&[Self::Key], &Self::Value) -> ControlFlow<()>;

    fn curry<'a>(&'a self, prefix: &[Self::Key]) -> Result<Self::Curried<'a>, Error>;
}

/// A [`CurriedDictionary`] which can be added to.
pub trait CurriedDictionaryMut: CurriedDictionary {
    /// Store `value` at `keys`, returning whether the tuple was new.
    fn add(&mut self, value: Self::Value, keys: &[Self::Key]) -> Result<bool, Error>;
}

impl<K, V, C> CurriedDictionary for Node<K, V, C>
where
    K: Clone + Debug,
    C: MapConfig<K>,
{
    type Key = K;
    type Value = V;
    type Curried<'a> = &'a Node<K, V, C> where Self: 'a;

    fn arity(&self) -> Arity {
        Node::arity(self)
    }

    fn count(&self) -> Count {
        Node::count(self)
    }

    fn contains_key_tuple(&self, keys: &[K]) -> Result<bool, Error> {
        Node::contains_key_tuple(self, keys)
    }

    fn contains_key_tuple_prefix(&self, prefix: &[K]) -> Result<bool, Error> {
        Node::contains_key_tuple_prefix(self, prefix)
    }

    fn with_value<R, F>(&self, keys: &[K], f: F) -> Result<R, Error>
    where
        F: FnOnce(&V) -> R,
    {
        self.get(keys).map(f)
    }

    fn for_each_entry<F>(&self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&[K], &V) -> ControlFlow<()>,
    {
        for (keys, value) in self.iter() {
            if f(&keys, value).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn curry<'a>(&'a self, prefix: &[K]) -> Result<&'a Node<K, V, C>, Error> {
        Node::curry(self, prefix)
    }
}

impl<K, V, C> CurriedDictionaryMut for Node<K, V, C>
where
    K: Clone + Debug,
    C: MapConfig<K>,
{
    fn add(&mut self, value: V, keys: &[K]) -> Result<bool, Error> {
        Node::add(self, value, keys)
    }
}

impl<D> CurriedDictionary for &D
where
    D: CurriedDictionary + ?Sized,
{
    type Key = D::Key;
    type Value = D::Value;
    type Curried<'a> = D::Curried<'a> where Self: 'a;

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn count(&self) -> Count {
        (**self).count()
    }

    fn contains_key_tuple(&self, keys: &[Self::Key]) -> Result<bool, Error> {
        (**self).contains_key_tuple(keys)
    }

    fn contains_key_tuple_prefix(&self, prefix: &[Self::Key]) -> Result<bool, Error> {
        (**self).contains_key_tuple_prefix(prefix)
    }

    fn with_value<R, F>(&self, keys: &[Self::Key], f: F) -> Result<R, Error>
    where
        F: FnOnce(&Self::Value) -> R,
    {
        (**self).with_value(keys, f)
    }

    fn for_each_entry<F>(&self, f: F) -> ControlFlow<()>
    where
        F: FnMut(&[Self::Key], &Self::Value) -> ControlFlow<()>,
    {
        (**self).for_each_entry(f)
    }

    fn curry<'a>(&'a self, prefix: &[Self::Key]) -> Result<Self::Curried<'a>, Error> {
        (**self).curry(prefix)
    }
}

impl<D> CurriedDictionary for &mut D
where
    D: CurriedDictionary + ?Sized,
{
    type Key = D::Key;
    type Value = D::Value;
    type Curried<'a> = D::Curried<'a> where Self: 'a;

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn count(&self) -> Count {
        (**self).count()
    }

    fn contains_key_tuple(&self, keys: &[Self::Key]) -> Result<bool, Error> {
        (**self).contains_key_tuple(keys)
    }

    fn contains_key_tuple_prefix(&self, prefix: &[Self::Key]) -> Result<bool, Error> {
        (**self).contains_key_tuple_prefix(prefix)
    }

    fn with_value<R, F>(&self, keys: &[Self::Key], f: F) -> Result<R, Error>
    where
        F: FnOnce(&Self::Value) -> R,
    {
        (**self).with_value(keys, f)
    }

    fn for_each_entry<F>(&self, f: F) -> ControlFlow<()>
    where
        F: FnMut(&[Self::Key], &Self::Value) -> ControlFlow<()>,
    {
        (**self).for_each_entry(f)
    }

    fn curry<'a>(&'a self, prefix: &[Self::Key]) -> Result<Self::Curried<'a>, Error> {
        (**self).curry(prefix)
    }
}

impl<D> CurriedDictionaryMut for &mut D
where
    D: CurriedDictionaryMut + ?Sized,
{
    fn add(&mut self, value: Self::Value, keys: &[Self::Key]) -> Result<bool, Error> {
        (**self).add(value, keys)
    }
}
