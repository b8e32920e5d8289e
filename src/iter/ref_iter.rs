use crate::{
    config::{ChildMap, MapConfig},
    node::{Node, Shape},
    types::MAX_ARITY,
};
use arrayvec::ArrayVec;
use std::{
    fmt::{Debug, Error, Formatter},
    iter::FusedIterator,
};

type Children<'a, K, V, C> = Box<dyn Iterator<Item = (&'a K, &'a Node<K, V, C>)> + 'a>;

/// A depth first walk over every key tuple stored under a node.
pub struct Iter<'a, K, V, C>
where
    C: MapConfig<K>,
{
    // One child iterator for each branch level being walked.
    stack: ArrayVec<[Children<'a, K, V, C>; MAX_ARITY]>,
    // The keys leading from the root to the deepest branch on the stack.
    path: ArrayVec<[&'a K; MAX_ARITY]>,
    leaf: Option<&'a V>,
    remaining: usize,
}

impl<'a, K, V, C> Iter<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    pub(crate) fn new(node: &'a Node<K, V, C>) -> Self {
        let mut iter = Iter {
            stack: ArrayVec::new(),
            path: ArrayVec::new(),
            leaf: None,
            remaining: node.len(),
        };
        match node.shape() {
            Shape::Branch(branch) => iter.stack.push(branch.children().iter()),
            Shape::Leaf(leaf) => iter.leaf = Some(leaf.value()),
        }
        iter
    }

    fn tuple(&self, last: &K) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.path.len() + 1);
        keys.extend(self.path.iter().map(|key| (*key).clone()));
        keys.push(last.clone());
        keys
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    type Item = (Vec<K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // A nullary root is a single entry under the empty tuple.
        if let Some(value) = self.leaf.take() {
            self.remaining -= 1;
            return Some((Vec::new(), value));
        }
        loop {
            let next = self.stack.last_mut()?.next();
            match next {
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
                Some((key, child)) => match child.shape() {
                    Shape::Leaf(leaf) => {
                        self.remaining -= 1;
                        return Some((self.tuple(key), leaf.value()));
                    }
                    Shape::Branch(branch) => {
                        self.path.push(key);
                        self.stack.push(branch.children().iter());
                    }
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> Debug for Iter<'a, K, V, C>
where
    C: MapConfig<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Iter(remaining = {})", self.remaining)
    }
}
