use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

/// A single entry of a hash table: an immutable key and a mutable value.
///
/// Equality (and hashing) only considers the key, so two pairs are equal if their keys are, no
/// matter their data. A pair can be compared against a bare key with
/// [`matches`](KeyValuePair::matches).
#[derive(Clone)]
pub struct KeyValuePair<K, V> {
    key: K,
    data: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub const fn new(key: K, data: V) -> KeyValuePair<K, V> {
        KeyValuePair {
            key,
            data,
        }
    }

    pub const fn key(&self) -> &K {
        &self.key
    }

    pub const fn data(&self) -> &V {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Replaces the data of this pair, returning the previous value.
    pub fn set_data(&mut self, data: V) -> V {
        mem::replace(&mut self.data, data)
    }

    pub fn into_data(self) -> V {
        self.data
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.data)
    }

    /// Returns true if this pair's key is equal to the provided bare `key`.
    pub fn matches<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.key.borrow() == key
    }
}

impl<K: PartialEq, V> PartialEq for KeyValuePair<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for KeyValuePair<K, V> {}

impl<K: Hash, V> Hash for KeyValuePair<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, data): (K, V)) -> Self {
        KeyValuePair::new(key, data)
    }
}

impl<K: Debug, V: Debug> Debug for KeyValuePair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}: {:?})", self.key, self.data)
    }
}
