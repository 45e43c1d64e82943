//! A small collection of in-memory associative arrays, written from scratch to probe how different
//! collision strategies behave.
//!
//! # Contents
//! - [`SinglyLinkedList`](collections::linked::SinglyLinkedList): a forward-only linked list,
//!   used as the bucket type for chaining.
//! - [`ChainedHashTable`](collections::hash::ChainedHashTable): a fixed number of buckets, each a
//!   list of the entries that hash to it.
//! - [`OpenAddressingHashTable`](collections::hash::OpenAddressingHashTable): one flat array of
//!   slots with linear probing, growing only once it is completely full.
//! - [`HashTable`](collections::traits::HashTable): the interface both tables share.
//!
//! Both tables hash keys through a [`KeyHasher`](collections::hash::KeyHasher). The default,
//! [`ModuloHasher`](collections::hash::ModuloHasher), is deliberately simple so that the layout of
//! a table can be worked out by hand, e.g. all strings of the same length collide.
//!
//! # Error Handling
//! Operations that can fail return strongly typed [`Result`]s, using ZSTs that implement
//! [`Error`](std::error::Error) and enums over them for static dispatch. A missing key is always
//! an error ([`NoSuchElement`](collections::hash::NoSuchElement)) rather than a [`None`].
//!
//! # Logging
//! Structural changes (growing or rebuilding an open addressing table) are reported through
//! [`tracing`] events. No subscriber is installed by this crate.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, as well as `tracing` for diagnostics.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
