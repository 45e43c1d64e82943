//! Hash tables and their building blocks.
//!
//! [`ChainedHashTable`] stores colliding entries in a [`SinglyLinkedList`] per bucket, while
//! [`OpenAddressingHashTable`] stores every entry in one flat array of slots and resolves
//! collisions with linear probing. Both select indices through a shared [`KeyHasher`], which
//! defaults to [`ModuloHasher`].
//!
//! [`SinglyLinkedList`]: crate::collections::linked::SinglyLinkedList

pub mod chained;
pub mod hasher;
pub mod open;
pub mod pair;

#[doc(inline)]
pub use chained::ChainedHashTable;
#[doc(inline)]
pub use hasher::{KeyHasher, ModuloHasher, StdHasher};
#[doc(inline)]
pub use open::OpenAddressingHashTable;
#[doc(inline)]
pub use pair::KeyValuePair;
#[doc(inline)]
pub use crate::util::error::NoSuchElement;

/// The capacity used by hash tables when none is provided.
pub const DEFAULT_CAP: usize = 10;

/// Tables can't index anything with a capacity of 0, so it falls back to the default instead.
pub(crate) const fn checked_cap(cap: usize) -> usize {
    if cap == 0 { DEFAULT_CAP } else { cap }
}
