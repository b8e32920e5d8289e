use crate::{
    branch::Branch,
    compare::{compare, Comparison},
    config::{MapConfig, Ordered},
    dictionary::CurriedDictionary,
    error::Error,
    iter::{Iter, Keys, Values},
    leaf::Leaf,
    magnitude::{Arity, Count},
    types::InsertResult,
};
use std::fmt::{Debug, Formatter};

/// A curried map from key tuples of a fixed length to values.
///
/// A node of arity `n` is either a branch, mapping each first key to a node
/// of arity `n - 1`, or, when `n` is zero, a leaf holding one value. Looking
/// up a tuple consumes one key per level until a leaf is reached.
///
/// Values are write-once: adding at a tuple which already holds a value
/// leaves the original in place.
///
/// Nodes do no locking of their own. Mutation needs `&mut`, so a node shared
/// between threads has to be put behind a lock by the caller.
pub struct Node<K, V, C = Ordered>
where
    C: MapConfig<K>,
{
    shape: Shape<K, V, C>,
}

pub(crate) enum Shape<K, V, C>
where
    C: MapConfig<K>,
{
    Branch(Branch<K, V, C>),
    Leaf(Leaf<V>),
}

impl<K, V, C> From<Branch<K, V, C>> for Node<K, V, C>
where
    C: MapConfig<K>,
{
    fn from(branch: Branch<K, V, C>) -> Self {
        Node {
            shape: Shape::Branch(branch),
        }
    }
}

impl<K, V, C> Node<K, V, C>
where
    C: MapConfig<K>,
{
    /// Construct an empty node taking key tuples of length `arity`.
    ///
    /// A node of arity 0 can't be empty, so that case is an error: build it
    /// with [`Node::leaf`] instead.
    pub fn new(arity: usize) -> Result<Self, Error> {
        let arity = Arity::new(arity)?;
        if arity.is_nullary() {
            return Err(Error::NullaryBranch);
        }
        Ok(Branch::new(arity).into())
    }

    /// Construct a node of arity 0 holding `value`.
    pub fn leaf(value: V) -> Self {
        Node {
            shape: Shape::Leaf(Leaf::new(value)),
        }
    }

    pub(crate) fn shape(&self) -> &Shape<K, V, C> {
        &self.shape
    }

    pub fn arity(&self) -> Arity {
        match &self.shape {
            Shape::Branch(branch) => branch.arity(),
            Shape::Leaf(_) => Arity::NULLARY,
        }
    }

    /// The number of key tuples stored under this node.
    ///
    /// This is kept up to date as values are added, so it's O(1).
    pub fn count(&self) -> Count {
        match &self.shape {
            Shape::Branch(branch) => branch.count(),
            Shape::Leaf(_) => Count::ONE,
        }
    }

    pub fn len(&self) -> usize {
        self.count().get()
    }

    pub fn is_empty(&self) -> bool {
        match &self.shape {
            Shape::Branch(branch) => branch.is_empty(),
            Shape::Leaf(_) => false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.shape, Shape::Leaf(_))
    }

    /// The value held by a leaf, or `None` for a branch.
    pub fn value(&self) -> Option<&V> {
        match &self.shape {
            Shape::Leaf(leaf) => Some(leaf.value()),
            Shape::Branch(_) => None,
        }
    }

    /// Apply a single key, returning the node of one lower arity under it.
    pub fn child(&self, key: &K) -> Option<&Self> {
        match &self.shape {
            Shape::Branch(branch) => branch.child(key),
            Shape::Leaf(_) => None,
        }
    }

    fn check_arity(&self, length: usize) -> Result<(), Error> {
        let expected = self.arity().get();
        if length == expected {
            Ok(())
        } else {
            Err(Error::IncorrectArity {
                expected,
                actual: length,
            })
        }
    }

    fn check_prefix(&self, length: usize) -> Result<(), Error> {
        let arity = self.arity().get();
        if length <= arity {
            Ok(())
        } else {
            Err(Error::PrefixTooLong { arity, length })
        }
    }

    // Follow `keys` as far as they go. On a miss, the position of the first
    // absent key is returned.
    fn descend(&self, keys: &[K]) -> Result<&Self, usize> {
        let mut node = self;
        for (position, key) in keys.iter().enumerate() {
            node = node.child(key).ok_or(position)?;
        }
        Ok(node)
    }

    /// Look up the value stored at `keys`.
    ///
    /// `keys` must hold exactly [`arity`](Node::arity) keys.
    pub fn get(&self, keys: &[K]) -> Result<&V, Error> {
        self.check_arity(keys.len())?;
        let node = self
            .descend(keys)
            .map_err(|position| Error::NotFound { position })?;
        node.value().ok_or(Error::NotFound {
            position: keys.len(),
        })
    }

    pub fn contains_key_tuple(&self, keys: &[K]) -> Result<bool, Error> {
        self.check_arity(keys.len())?;
        Ok(self.descend(keys).map_or(false, |node| node.is_leaf()))
    }

    /// Test whether any stored key tuple starts with `prefix`.
    ///
    /// The empty prefix is always contained, even by an empty node.
    pub fn contains_key_tuple_prefix(&self, prefix: &[K]) -> Result<bool, Error> {
        self.check_prefix(prefix.len())?;
        Ok(self.descend(prefix).is_ok())
    }

    /// Partially apply `prefix`, returning the node of arity
    /// `arity - prefix.len()` which holds every tuple starting with it.
    ///
    /// The returned node is shared with this one. It can be read, but adding
    /// has to go through the root so that every count on the path moves.
    pub fn curry(&self, prefix: &[K]) -> Result<&Self, Error>
    where
        K: Debug,
    {
        self.check_prefix(prefix.len())?;
        self.descend(prefix)
            .map_err(|position| Error::MissingPrefixKey {
                position,
                key: format!("{:?}", prefix[position]),
            })
    }

    /// Compare against any other dictionary with the same key type.
    ///
    /// See [`compare`](crate::compare()).
    pub fn compare<D, F>(&self, other: &D, is_equal: F) -> Comparison
    where
        K: Clone + Debug,
        V: Debug,
        D: CurriedDictionary<Key = K>,
        D::Value: Debug,
        F: Fn(&V, &D::Value) -> bool,
    {
        compare(self, other, is_equal)
    }
}

impl<K, V, C> Node<K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    /// Store `value` at `keys`.
    ///
    /// Returns `Ok(true)` if the tuple was new. If the tuple already holds a
    /// value, nothing changes and `Ok(false)` is returned. A tuple of the
    /// wrong length is rejected before anything is touched.
    pub fn add(&mut self, value: V, keys: &[K]) -> Result<bool, Error> {
        self.check_arity(keys.len())?;
        Ok(self.insert(value, keys)?.is_added())
    }

    pub(crate) fn insert(&mut self, value: V, keys: &[K]) -> Result<InsertResult, Error> {
        match &mut self.shape {
            Shape::Branch(branch) => branch.add(value, keys),
            Shape::Leaf(_) => Ok(InsertResult::Occupied),
        }
    }

    /// Iterate over every stored key tuple and its value.
    ///
    /// Each tuple is a freshly allocated `Vec`. With the [`Ordered`] config
    /// tuples come out in ascending order; otherwise the order is
    /// unspecified.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V, C> {
        Values::new(self.iter())
    }
}

#[cfg(feature = "tree_debug")]
impl<K, V, C> Debug for Node<K, V, C>
where
    K: Debug,
    V: Debug,
    C: MapConfig<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.shape {
            Shape::Branch(branch) => branch.tree_fmt(f, 0),
            Shape::Leaf(leaf) => leaf.fmt(f),
        }
    }
}

#[cfg(not(feature = "tree_debug"))]
impl<K, V, C> Debug for Node<K, V, C>
where
    K: Clone + Debug,
    V: Debug,
    C: MapConfig<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, C2> PartialEq<Node<K, V, C2>> for Node<K, V, C>
where
    K: Clone,
    V: PartialEq,
    C: MapConfig<K>,
    C2: MapConfig<K>,
{
    fn eq(&self, other: &Node<K, V, C2>) -> bool {
        self.arity() == other.arity()
            && self.count() == other.count()
            && self
                .iter()
                .all(|(keys, value)| other.get(&keys).map_or(false, |other| value == other))
    }
}

impl<K, V, C> Eq for Node<K, V, C>
where
    K: Clone,
    V: Eq,
    C: MapConfig<K>,
{
}

impl<'a, K, V, C> IntoIterator for &'a Node<K, V, C>
where
    K: Clone,
    C: MapConfig<K>,
{
    type Item = (Vec<K>, &'a V);
    type IntoIter = Iter<'a, K, V, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::Hashed, error::ErrorKind};

    fn greetings() -> Node<i32, &'static str> {
        let mut node = Node::new(2).unwrap();
        assert_eq!(Ok(true), node.add("hello", &[1, 2]));
        assert_eq!(Ok(true), node.add("hi", &[2, 1]));
        node
    }

    #[test]
    fn lookup_empty() {
        let node: Node<usize, usize> = Node::new(2).unwrap();
        assert!(node.is_empty());
        assert_eq!(node.count(), 0);
        assert_eq!(Err(Error::NotFound { position: 0 }), node.get(&[1, 2]));
        assert_eq!(Ok(false), node.contains_key_tuple(&[1, 2]));
        assert_eq!(Ok(true), node.contains_key_tuple_prefix(&[]));
    }

    #[test]
    fn two_greetings() {
        let node = greetings();
        assert_eq!(node.count(), 2);
        assert_eq!(Ok(&"hello"), node.get(&[1, 2]));
        assert_eq!(Ok(&"hi"), node.get(&[2, 1]));
        assert_eq!(Ok(true), node.contains_key_tuple(&[2, 1]));
        assert_eq!(Ok(false), node.contains_key_tuple(&[1, 1]));
        assert_eq!(Ok(true), node.curry(&[1]).unwrap().contains_key_tuple(&[2]));
    }

    #[test]
    fn missing_key_reports_position() {
        let node = greetings();
        assert_eq!(Err(Error::NotFound { position: 1 }), node.get(&[1, 1]));
        assert_eq!(Err(Error::NotFound { position: 0 }), node.get(&[3, 1]));
        assert!(node.get(&[3, 1]).unwrap_err().is_not_found());
    }

    #[test]
    fn occupied_tuples_keep_their_value() {
        let mut node = greetings();
        assert_eq!(Ok(false), node.add("howdy", &[1, 2]));
        assert_eq!(Ok(&"hello"), node.get(&[1, 2]));
        assert_eq!(node.count(), 2);
    }

    #[test]
    fn wrong_arity_is_rejected_before_mutation() {
        let mut node = greetings();
        let error = node.add("nope", &[1, 2, 3]).unwrap_err();
        assert_eq!(
            Error::IncorrectArity {
                expected: 2,
                actual: 3
            },
            error
        );
        assert_eq!(ErrorKind::InvalidArgument, error.kind());
        assert!(node.add("nope", &[3]).is_err());
        assert!(node.get(&[1]).is_err());
        assert!(node.contains_key_tuple(&[]).is_err());
        assert_eq!(node.count(), 2);
        assert_eq!(Ok(false), node.contains_key_tuple_prefix(&[3]));
    }

    #[test]
    fn prefixes() {
        let node = greetings();
        assert_eq!(Ok(true), node.contains_key_tuple_prefix(&[]));
        assert_eq!(Ok(true), node.contains_key_tuple_prefix(&[1]));
        assert_eq!(Ok(true), node.contains_key_tuple_prefix(&[1, 2]));
        assert_eq!(Ok(false), node.contains_key_tuple_prefix(&[1, 1]));
        assert_eq!(Ok(false), node.contains_key_tuple_prefix(&[3]));
        assert_eq!(
            Err(Error::PrefixTooLong {
                arity: 2,
                length: 3
            }),
            node.contains_key_tuple_prefix(&[1, 2, 3])
        );
    }

    #[test]
    fn curry_lowers_arity() {
        let node = greetings();
        assert_eq!(node.curry(&[]).unwrap().arity(), 2);
        let curried = node.curry(&[2]).unwrap();
        assert_eq!(curried.arity(), 1);
        assert_eq!(curried.count(), 1);
        assert_eq!(Ok(&"hi"), curried.get(&[1]));
        let leaf = node.curry(&[1, 2]).unwrap();
        assert_eq!(leaf.arity(), 0);
        assert_eq!(Some(&"hello"), leaf.value());
        assert_eq!(Ok(&"hello"), leaf.get(&[]));
        assert_eq!(
            Err(Error::MissingPrefixKey {
                position: 1,
                key: "7".to_string()
            }),
            node.curry(&[1, 7]).map(|_| ())
        );
    }

    #[test]
    fn nullary_nodes() {
        assert_eq!(
            Err(Error::NullaryBranch),
            Node::<u8, u8>::new(0).map(|_| ())
        );
        let mut leaf: Node<u8, &str> = Node::leaf("only");
        assert_eq!(leaf.arity(), 0);
        assert_eq!(leaf.count(), 1);
        assert!(!leaf.is_empty());
        assert_eq!(Ok(&"only"), leaf.get(&[]));
        assert_eq!(Ok(true), leaf.contains_key_tuple(&[]));
        assert_eq!(Ok(false), leaf.add("other", &[]));
        assert_eq!(Ok(&"only"), leaf.get(&[]));
        let entries: Vec<_> = leaf.iter().collect();
        assert_eq!(vec![(vec![], &"only")], entries);
    }

    #[test]
    fn arity_limit() {
        assert!(Node::<u8, u8>::new(16).is_ok());
        assert_eq!(
            Err(Error::ArityTooLarge { arity: 17, max: 16 }),
            Node::<u8, u8>::new(17).map(|_| ())
        );
    }

    #[test]
    fn ordered_enumeration() {
        let mut node: Node<u8, u32> = Node::new(3).unwrap();
        for (a, b, c) in [(2, 1, 1), (1, 2, 3), (1, 2, 1), (0, 9, 9), (1, 0, 0)] {
            node.add(a as u32 * 100 + b as u32 * 10 + c as u32, &[a, b, c])
                .unwrap();
        }
        let keys: Vec<Vec<u8>> = node.keys().collect();
        assert_eq!(
            vec![
                vec![0, 9, 9],
                vec![1, 0, 0],
                vec![1, 2, 1],
                vec![1, 2, 3],
                vec![2, 1, 1]
            ],
            keys
        );
        let values: Vec<u32> = node.values().cloned().collect();
        assert_eq!(vec![99, 100, 121, 123, 211], values);
        assert_eq!(5, node.iter().len());
    }

    #[test]
    fn sequential_insert_count() {
        let mut node: Node<usize, usize> = Node::new(3).unwrap();
        let mut added = 0;
        for i in 0..4096 {
            let keys = [i % 7, i % 13, i % 5];
            if node.add(i, &keys).unwrap() {
                added += 1;
            }
        }
        assert_eq!(node.count(), added);
        assert_eq!(added, node.iter().count());
        for (keys, value) in &node {
            assert_eq!(Ok(value), node.get(&keys));
        }
    }

    #[test]
    fn equality_ignores_config() {
        let ordered = greetings();
        let mut hashed: Node<i32, &str, Hashed> = Node::new(2).unwrap();
        hashed.add("hi", &[2, 1]).unwrap();
        assert!(ordered != hashed);
        hashed.add("hello", &[1, 2]).unwrap();
        assert!(ordered == hashed);
        assert_eq!(ordered, greetings());
        let mut other = greetings();
        other.add("hey", &[3, 3]).unwrap();
        assert_ne!(ordered, other);
    }

    #[test]
    fn debug_as_map() {
        let node = greetings();
        if cfg!(not(feature = "tree_debug")) {
            assert_eq!(r#"{[1, 2]: "hello", [2, 1]: "hi"}"#, format!("{:?}", node));
        }
    }
}
