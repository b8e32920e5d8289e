use crate::{
    config::{ChildMap, MapConfig},
    error::Error,
    magnitude::{Arity, Count},
    node::Node,
    types::{InsertResult, MAX_ARITY},
};
#[cfg(feature = "tree_debug")]
use crate::node::Shape;
#[cfg(feature = "tree_debug")]
use std::fmt::{Debug, Formatter};
use tracing::trace;

/// A branch node maps each key at its level to a child of one lower arity.
///
/// The running count is kept in step with the children on every insert, so
/// reading it never walks the tree.
pub(crate) struct Branch<K, V, C>
where
    C: MapConfig<K>,
{
    arity: Arity,
    count: Count,
    children: C::Children<Node<K, V, C>>,
}

impl<K, V, C> Branch<K, V, C>
where
    C: MapConfig<K>,
{
    pub(crate) fn new(arity: Arity) -> Self {
        debug_assert!(!arity.is_nullary());
        debug_assert!(arity.get() <= MAX_ARITY);
        Branch {
            arity,
            count: Count::ZERO,
            children: Default::default(),
        }
    }

    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }

    pub(crate) fn count(&self) -> Count {
        self.count
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn children(&self) -> &C::Children<Node<K, V, C>> {
        &self.children
    }

    pub(crate) fn child(&self, key: &K) -> Option<&Node<K, V, C>> {
        self.children.get(key)
    }

    /// Store `value` under `keys`, which must hold exactly `arity` keys.
    ///
    /// Children are created on the way down for any key not seen before at
    /// its level. The outcome is applied to this branch's count before it
    /// is handed back, so every branch on the path sees the same delta.
    pub(crate) fn add(&mut self, value: V, keys: &[K]) -> Result<InsertResult, Error>
    where
        K: Clone,
    {
        debug_assert_eq!(keys.len(), self.arity.get());
        let (key, rest) = match keys.split_first() {
            Some(split) => split,
            None => return Ok(InsertResult::Occupied),
        };
        let result = match self.children.get_mut(key) {
            Some(child) => child.insert(value, rest)?,
            None => {
                let child = if rest.is_empty() {
                    Node::leaf(value)
                } else {
                    let mut branch = Branch::new(self.arity.predecessor());
                    // A fresh branch has nothing to collide with.
                    branch.add(value, rest)?;
                    Node::from(branch)
                };
                trace!(arity = %child.arity(), "created child node");
                self.children.insert(key.clone(), child);
                InsertResult::Added
            }
        };
        self.count = self.count.apply(result.delta())?;
        Ok(result)
    }
}

#[cfg(feature = "tree_debug")]
impl<K, V, C> Branch<K, V, C>
where
    K: Debug,
    V: Debug,
    C: MapConfig<K>,
{
    pub(crate) fn tree_fmt(&self, f: &mut Formatter<'_>, level: usize) -> std::fmt::Result {
        let indent = "    ".repeat(level);
        writeln!(
            f,
            "{}Branch(arity = {}, count = {})",
            indent, self.arity, self.count
        )?;
        for (key, child) in self.children.iter() {
            match child.shape() {
                Shape::Branch(branch) => {
                    writeln!(f, "{}  [{:?}]:", indent, key)?;
                    branch.tree_fmt(f, level + 1)?;
                }
                Shape::Leaf(leaf) => writeln!(f, "{}  [{:?}]: {:?}", indent, key, leaf)?,
            }
        }
        Ok(())
    }
}
