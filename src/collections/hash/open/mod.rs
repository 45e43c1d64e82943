//! A module containing [`OpenAddressingHashTable`] and its iterators.

mod iter;
mod open_addressing_hash_table;

pub use iter::*;
pub use open_addressing_hash_table::*;
