//! Associative arrays and the collections they're built from.
//!
//! # Purpose
//! The hash tables here exist to compare two ways of resolving collisions, separate chaining and
//! open addressing with linear probing, behind one [`HashTable`](traits::HashTable) interface.
//! Both share a deliberately coarse hash function, so collisions are common and easy to reason
//! about in tests.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
