use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The requested key or element isn't present in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No such element in collection!")
    }
}

impl Error for NoSuchElement {}

/// An operation that requires at least one element was attempted on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty list!")
    }
}

impl Error for EmptyList {}

// Hash tables only ever report a missing key, even when the bucket they delegated to was empty.
impl From<EmptyList> for NoSuchElement {
    fn from(_: EmptyList) -> NoSuchElement {
        NoSuchElement
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    EmptyList(EmptyList),
    NoSuchElement(NoSuchElement),
}
