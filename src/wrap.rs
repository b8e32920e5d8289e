use crate::{
    compare::{compare, Comparison},
    dictionary::{CurriedDictionary, CurriedDictionaryMut},
    error::Error,
    magnitude::{Arity, Count},
};
use std::{
    fmt::{Debug, Formatter},
    marker::PhantomData,
    ops::ControlFlow,
};

/// A pair of conversions between an inner and an outer key type, and an
/// inner and an outer value type.
///
/// `key_out` should undo `key_in`, and `value_out` should undo `value_in`,
/// for every value that actually passes through. Nothing checks this.
pub trait Transform {
    type InnerKey;
    type OuterKey;
    type InnerValue;
    type OuterValue;

    fn key_in(&self, key: &Self::OuterKey) -> Self::InnerKey;
    fn key_out(&self, key: &Self::InnerKey) -> Self::OuterKey;
    fn value_in(&self, value: &Self::OuterValue) -> Self::InnerValue;
    fn value_out(&self, value: &Self::InnerValue) -> Self::OuterValue;

    fn keys_in(&self, keys: &[Self::OuterKey]) -> Vec<Self::InnerKey> {
        keys.iter().map(|key| self.key_in(key)).collect()
    }

    fn keys_out(&self, keys: &[Self::InnerKey]) -> Vec<Self::OuterKey> {
        keys.iter().map(|key| self.key_out(key)).collect()
    }
}

impl<T> Transform for &T
where
    T: Transform + ?Sized,
{
    type InnerKey = T::InnerKey;
    type OuterKey = T::OuterKey;
    type InnerValue = T::InnerValue;
    type OuterValue = T::OuterValue;

    fn key_in(&self, key: &Self::OuterKey) -> Self::InnerKey {
        (**self).key_in(key)
    }

    fn key_out(&self, key: &Self::InnerKey) -> Self::OuterKey {
        (**self).key_out(key)
    }

    fn value_in(&self, value: &Self::OuterValue) -> Self::InnerValue {
        (**self).value_in(value)
    }

    fn value_out(&self, value: &Self::InnerValue) -> Self::OuterValue {
        (**self).value_out(value)
    }
}

/// A [`Transform`] with its inner and outer sides swapped.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<T>(pub T);

impl<T> Transform for Reversed<T>
where
    T: Transform,
{
    type InnerKey = T::OuterKey;
    type OuterKey = T::InnerKey;
    type InnerValue = T::OuterValue;
    type OuterValue = T::InnerValue;

    fn key_in(&self, key: &Self::OuterKey) -> Self::InnerKey {
        self.0.key_out(key)
    }

    fn key_out(&self, key: &Self::InnerKey) -> Self::OuterKey {
        self.0.key_in(key)
    }

    fn value_in(&self, value: &Self::OuterValue) -> Self::InnerValue {
        self.0.value_out(value)
    }

    fn value_out(&self, value: &Self::InnerValue) -> Self::OuterValue {
        self.0.value_in(value)
    }
}

/// A [`Transform`] built from four functions.
pub struct FnTransform<KI, KO, VI, VO, FKI, FKO, FVI, FVO> {
    types: PhantomData<(KI, KO, VI, VO)>,
    key_in: FKI,
    key_out: FKO,
    value_in: FVI,
    value_out: FVO,
}

impl<KI, KO, VI, VO, FKI, FKO, FVI, FVO> FnTransform<KI, KO, VI, VO, FKI, FKO, FVI, FVO>
where
    FKI: Fn(&KO) -> KI,
    FKO: Fn(&KI) -> KO,
    FVI: Fn(&VO) -> VI,
    FVO: Fn(&VI) -> VO,
{
    pub fn new(key_in: FKI, key_out: FKO, value_in: FVI, value_out: FVO) -> Self {
        FnTransform {
            types: PhantomData,
            key_in,
            key_out,
            value_in,
            value_out,
        }
    }
}

impl<KI, KO, VI, VO, FKI, FKO, FVI, FVO> Transform
    for FnTransform<KI, KO, VI, VO, FKI, FKO, FVI, FVO>
where
    FKI: Fn(&KO) -> KI,
    FKO: Fn(&KI) -> KO,
    FVI: Fn(&VO) -> VI,
    FVO: Fn(&VI) -> VO,
{
    type InnerKey = KI;
    type OuterKey = KO;
    type InnerValue = VI;
    type OuterValue = VO;

    fn key_in(&self, key: &KO) -> KI {
        (self.key_in)(key)
    }

    fn key_out(&self, key: &KI) -> KO {
        (self.key_out)(key)
    }

    fn value_in(&self, value: &VO) -> VI {
        (self.value_in)(value)
    }

    fn value_out(&self, value: &VI) -> VO {
        (self.value_out)(value)
    }
}

impl<KI, KO, VI, VO, FKI, FKO, FVI, FVO> Debug for FnTransform<KI, KO, VI, VO, FKI, FKO, FVI, FVO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FnTransform")
    }
}

/// A view of a dictionary under different key and value types.
///
/// Every key and value crossing the boundary goes through the transform:
/// arguments on the way in, results on the way out. The wrapper stores
/// nothing of its own.
pub struct Wrapped<D, T> {
    dictionary: D,
    transform: T,
}

impl<D, T> Wrapped<D, T>
where
    T: Transform,
    D: CurriedDictionary<Key = T::InnerKey, Value = T::InnerValue>,
{
    pub fn new(dictionary: D, transform: T) -> Self {
        Wrapped {
            dictionary,
            transform,
        }
    }

    pub fn inner(&self) -> &D {
        &self.dictionary
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn into_inner(self) -> D {
        self.dictionary
    }

    pub fn arity(&self) -> Arity {
        self.dictionary.arity()
    }

    pub fn count(&self) -> Count {
        self.dictionary.count()
    }

    pub fn get(&self, keys: &[T::OuterKey]) -> Result<T::OuterValue, Error> {
        self.dictionary
            .with_value(&self.transform.keys_in(keys), |value| {
                self.transform.value_out(value)
            })
    }

    pub fn contains_key_tuple(&self, keys: &[T::OuterKey]) -> Result<bool, Error> {
        self.dictionary
            .contains_key_tuple(&self.transform.keys_in(keys))
    }

    pub fn contains_key_tuple_prefix(&self, prefix: &[T::OuterKey]) -> Result<bool, Error> {
        self.dictionary
            .contains_key_tuple_prefix(&self.transform.keys_in(prefix))
    }

    /// Partially apply `prefix`, returning a view of the curried dictionary
    /// through the same transform.
    pub fn curry(&self, prefix: &[T::OuterKey]) -> Result<Wrapped<D::Curried<'_>, &T>, Error> {
        let curried = self.dictionary.curry(&self.transform.keys_in(prefix))?;
        Ok(Wrapped::new(curried, &self.transform))
    }

    pub fn keys(&self) -> Vec<Vec<T::OuterKey>> {
        let mut keys = Vec::with_capacity(self.count().get());
        let _ = self.dictionary.for_each_entry(|tuple, _| {
            keys.push(self.transform.keys_out(tuple));
            ControlFlow::Continue(())
        });
        keys
    }

    pub fn values(&self) -> Vec<T::OuterValue> {
        let mut values = Vec::with_capacity(self.count().get());
        let _ = self.dictionary.for_each_entry(|_, value| {
            values.push(self.transform.value_out(value));
            ControlFlow::Continue(())
        });
        values
    }

    pub fn key_value_pairs(&self) -> Vec<(Vec<T::OuterKey>, T::OuterValue)> {
        let mut pairs = Vec::with_capacity(self.count().get());
        let _ = self.dictionary.for_each_entry(|tuple, value| {
            pairs.push((
                self.transform.keys_out(tuple),
                self.transform.value_out(value),
            ));
            ControlFlow::Continue(())
        });
        pairs
    }

    /// Compare against a dictionary of the outer types.
    ///
    /// `other` is viewed through the reversed transform so the comparison
    /// runs on inner keys and values, and `is_equal` sees both sides
    /// converted back out.
    pub fn compare<O, F>(&self, other: &O, is_equal: F) -> Comparison
    where
        O: CurriedDictionary<Key = T::OuterKey, Value = T::OuterValue>,
        T::InnerKey: Debug,
        T::InnerValue: Debug,
        F: Fn(&T::OuterValue, &T::OuterValue) -> bool,
    {
        let other = Wrapped::new(other, Reversed(&self.transform));
        compare(&self.dictionary, &other, |left, right| {
            is_equal(
                &self.transform.value_out(left),
                &self.transform.value_out(right),
            )
        })
    }
}

impl<D, T> Wrapped<D, T>
where
    T: Transform,
    D: CurriedDictionaryMut<Key = T::InnerKey, Value = T::InnerValue>,
{
    pub fn add(&mut self, value: T::OuterValue, keys: &[T::OuterKey]) -> Result<bool, Error> {
        self.dictionary.add(
            self.transform.value_in(&value),
            &self.transform.keys_in(keys),
        )
    }
}

impl<D, T> CurriedDictionary for Wrapped<D, T>
where
    T: Transform,
    D: CurriedDictionary<Key = T::InnerKey, Value = T::InnerValue>,
{
    type Key = T::OuterKey;
    type Value = T::OuterValue;
    type Curried<'a> = Wrapped<D::Curried<'a>, &'a T> where Self: 'a;

    fn arity(&self) -> Arity {
        Wrapped::arity(self)
    }

    fn count(&self) -> Count {
        Wrapped::count(self)
    }

    fn contains_key_tuple(&self, keys: &[T::OuterKey]) -> Result<bool, Error> {
        Wrapped::contains_key_tuple(self, keys)
    }

    fn contains_key_tuple_prefix(&self, prefix: &[T::OuterKey]) -> Result<bool, Error> {
        Wrapped::contains_key_tuple_prefix(self, prefix)
    }

    fn with_value<R, F>(&self, keys: &[T::OuterKey], f: F) -> Result<R, Error>
    where
        F: FnOnce(&T::OuterValue) -> R,
    {
        self.dictionary
            .with_value(&self.transform.keys_in(keys), |value| {
                f(&self.transform.value_out(value))
            })
    }

    fn for_each_entry<F>(&self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&[T::OuterKey], &T::OuterValue) -> ControlFlow<()>,
    {
        self.dictionary.for_each_entry(|keys, value| {
            f(
                &self.transform.keys_out(keys),
                &self.transform.value_out(value),
            )
        })
    }

    fn curry<'a>(&'a self, prefix: &[T::OuterKey]) -> Result<Self::Curried<'a>, Error> {
        Wrapped::curry(self, prefix)
    }
}

impl<D, T> CurriedDictionaryMut for Wrapped<D, T>
where
    T: Transform,
    D: CurriedDictionaryMut<Key = T::InnerKey, Value = T::InnerValue>,
{
    fn add(&mut self, value: T::OuterValue, keys: &[T::OuterKey]) -> Result<bool, Error> {
        Wrapped::add(self, value, keys)
    }
}

impl<D, T> Debug for Wrapped<D, T>
where
    D: Debug,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapped")
            .field("dictionary", &self.dictionary)
            .field("transform", &self.transform)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Node;

    fn stringly<V: Clone>() -> impl Transform<
        InnerKey = i32,
        OuterKey = String,
        InnerValue = V,
        OuterValue = V,
    > {
        FnTransform::new(
            |key: &String| key.parse::<i32>().unwrap_or_default(),
            |key: &i32| key.to_string(),
            |value: &V| value.clone(),
            |value: &V| value.clone(),
        )
    }

    #[test]
    fn wrapped_lookup() {
        let mut node: Node<i32, &str> = Node::new(1).unwrap();
        node.add("x", &[5]).unwrap();
        let wrapped = Wrapped::new(&node, stringly());
        assert_eq!(Ok("x"), wrapped.get(&["5".to_string()]));
        assert_eq!(Ok(true), wrapped.contains_key_tuple(&["5".to_string()]));
        assert_eq!(Ok(false), wrapped.contains_key_tuple(&["6".to_string()]));
        assert!(wrapped.get(&["6".to_string()]).unwrap_err().is_not_found());
        assert_eq!(vec![vec!["5".to_string()]], wrapped.keys());
        assert_eq!(wrapped.count(), 1);
    }

    #[test]
    fn wrapped_add_reaches_the_backing_node() {
        let mut node: Node<i32, u64> = Node::new(2).unwrap();
        {
            let mut wrapped = Wrapped::new(&mut node, stringly());
            assert_eq!(Ok(true), wrapped.add(7, &["1".to_string(), "2".to_string()]));
            assert_eq!(Ok(false), wrapped.add(8, &["1".to_string(), "2".to_string()]));
            assert!(wrapped.add(9, &["1".to_string()]).is_err());
            assert_eq!(wrapped.count(), 1);
        }
        assert_eq!(Ok(&7), node.get(&[1, 2]));
    }

    #[test]
    fn values_cross_the_boundary() {
        let mut node: Node<u8, u32> = Node::new(1).unwrap();
        let transform = FnTransform::new(
            |key: &char| *key as u8,
            |key: &u8| *key as char,
            |value: &String| value.len() as u32,
            |value: &u32| "#".repeat(*value as usize),
        );
        let mut wrapped = Wrapped::new(&mut node, transform);
        wrapped.add("abc".to_string(), &['a']).unwrap();
        wrapped.add("xy".to_string(), &['b']).unwrap();
        assert_eq!(Ok("###".to_string()), wrapped.get(&['a']));
        assert_eq!(
            vec![(vec!['a'], "###".to_string()), (vec!['b'], "##".to_string())],
            wrapped.key_value_pairs()
        );
        assert_eq!(vec!["###".to_string(), "##".to_string()], wrapped.values());
        assert_eq!(Ok(&3), node.get(&[b'a']));
    }

    #[test]
    fn wrapped_curry() {
        let mut node: Node<i32, &str> = Node::new(2).unwrap();
        node.add("a", &[1, 1]).unwrap();
        node.add("b", &[1, 2]).unwrap();
        node.add("c", &[2, 1]).unwrap();
        let wrapped = Wrapped::new(&node, stringly());
        let curried = wrapped.curry(&["1".to_string()]).unwrap();
        assert_eq!(curried.arity(), 1);
        assert_eq!(curried.count(), 2);
        assert_eq!(Ok("b"), curried.get(&["2".to_string()]));
        assert_eq!(vec![vec!["1".to_string()], vec!["2".to_string()]], curried.keys());
        assert!(wrapped.curry(&["3".to_string()]).is_err());
        assert_eq!(Ok(true), wrapped.contains_key_tuple_prefix(&["2".to_string()]));
    }

    #[test]
    fn wrapped_compare_runs_on_inner_types() {
        let mut node: Node<i32, &str> = Node::new(1).unwrap();
        node.add("x", &[5]).unwrap();
        node.add("y", &[6]).unwrap();
        let wrapped = Wrapped::new(&node, stringly());

        let mut other: Node<String, &str> = Node::new(1).unwrap();
        other.add("x", &["5".to_string()]).unwrap();
        other.add("y", &["6".to_string()]).unwrap();
        let comparison = wrapped.compare(&other, |a, b| a == b);
        assert!(comparison.is_equal(), "{}", comparison);

        let mut different: Node<String, &str> = Node::new(1).unwrap();
        different.add("x", &["5".to_string()]).unwrap();
        different.add("z", &["6".to_string()]).unwrap();
        let comparison = wrapped.compare(&different, |a, b| a == b);
        assert!(!comparison.is_equal());
        assert_eq!(
            r#"Mismatch at key tuple [6]: left = "y", right = "z""#,
            comparison.message()
        );
        assert!(wrapped.compare(&different, |_, _| true).is_equal());
    }

    #[test]
    fn reversed_swaps_roles() {
        let transform = stringly::<u8>();
        let reversed = Reversed(&transform);
        assert_eq!("12", transform.key_out(&12));
        assert_eq!(12, reversed.key_out(&"12".to_string()));
        assert_eq!("12", reversed.key_in(&12));
        assert_eq!(vec![1, 2], reversed.keys_out(&["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn wrap_a_wrapper() {
        let mut node: Node<i32, &str> = Node::new(1).unwrap();
        node.add("x", &[5]).unwrap();
        let inner = Wrapped::new(&node, stringly());
        let outer = Wrapped::new(inner, Reversed(stringly()));
        assert_eq!(Ok("x"), outer.get(&[5]));
        assert_eq!(vec![vec![5]], outer.keys());
    }
}
