//! Traits shared between collections with equivalent interfaces.

pub mod hash_table;

#[doc(inline)]
pub use hash_table::HashTable;
