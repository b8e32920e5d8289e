// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A curried multi-key map.
//!
//! A [`Node`] of arity `n` maps tuples of exactly `n` keys to values. Each
//! key in the tuple selects a child of one lower arity, down to arity zero,
//! where a node holds a single value. Supplying only a prefix of a tuple
//! [curries](Node::curry) the map, handing back the sub-map of remaining
//! arity.
//!
//! ```
//! use curried::Node;
//!
//! let mut greetings: Node<i32, &str> = Node::new(2)?;
//! greetings.add("hello", &[1, 2])?;
//! greetings.add("hi", &[2, 1])?;
//!
//! assert_eq!(greetings.count(), 2);
//! assert_eq!(Ok(&"hi"), greetings.get(&[2, 1]));
//! assert!(greetings.get(&[1, 1]).is_err());
//!
//! let curried = greetings.curry(&[1])?;
//! assert_eq!(curried.arity(), 1);
//! assert_eq!(Ok(&"hello"), curried.get(&[2]));
//! # Ok::<(), curried::Error>(())
//! ```
//!
//! Child maps are chosen through a [`MapConfig`]: [`Ordered`] keeps
//! children in a `BTreeMap`, so iteration and comparison messages follow key
//! order, while [`Hashed`] uses a `HashMap` for keys which are only
//! `Hash + Eq`.
//!
//! Tuples can be added but never removed, so a node's count only grows.
//! Nothing here synchronises: share a node between threads behind a lock
//! of your choosing.

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(
    unreachable_pub,
    missing_debug_implementations,
    // missing_docs,
)]

mod branch;
mod compare;
mod config;
mod dictionary;
mod error;
mod iter;
mod leaf;
mod magnitude;
mod node;
mod types;
mod wrap;

pub use compare::{compare, Comparison};
pub use config::{ChildMap, Hashed, MapConfig, Ordered};
pub use dictionary::{CurriedDictionary, CurriedDictionaryMut};
pub use error::{Error, ErrorKind};
pub use iter::{Iter, Keys, Values};
pub use magnitude::{Arity, Count};
pub use node::Node;
pub use wrap::{FnTransform, Reversed, Transform, Wrapped};
