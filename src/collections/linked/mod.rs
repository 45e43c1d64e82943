//! Linked collection types. Currently this is just [`SinglyLinkedList`], which the chained hash
//! table uses for its buckets.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
