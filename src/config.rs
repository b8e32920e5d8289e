use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// The associative map a branch keeps its children in.
pub trait ChildMap<K, T>: Default {
    fn get(&self, key: &K) -> Option<&T>;
    fn get_mut(&mut self, key: &K) -> Option<&mut T>;
    fn insert(&mut self, key: K, child: T);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a T)> + 'a>
    where
        K: 'a,
        T: 'a;
}

/// Selects the child map used at every level of a tree.
///
/// [`Ordered`] enumerates key tuples in ascending order, which makes
/// comparison diagnostics deterministic. [`Hashed`] drops the `Ord`
/// requirement on keys and makes no ordering promise.
pub trait MapConfig<K> {
    type Children<T>: ChildMap<K, T>;
}

/// Children in a [`BTreeMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered;

impl<K: Ord> MapConfig<K> for Ordered {
    type Children<T> = BTreeMap<K, T>;
}

/// Children in a [`HashMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hashed;

impl<K: Hash + Eq> MapConfig<K> for Hashed {
    type Children<T> = HashMap<K, T>;
}

impl<K: Ord, T> ChildMap<K, T> for BTreeMap<K, T> {
    fn get(&self, key: &K) -> Option<&T> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        BTreeMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, child: T) {
        BTreeMap::insert(self, key, child);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a T)> + 'a>
    where
        K: 'a,
        T: 'a,
    {
        Box::new(BTreeMap::iter(self))
    }
}

impl<K: Hash + Eq, T> ChildMap<K, T> for HashMap<K, T> {
    fn get(&self, key: &K) -> Option<&T> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        HashMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, child: T) {
        HashMap::insert(self, key, child);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a T)> + 'a>
    where
        K: 'a,
        T: 'a,
    {
        Box::new(HashMap::iter(self))
    }
}
