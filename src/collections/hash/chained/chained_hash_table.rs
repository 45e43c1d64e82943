use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use super::{Iter, Values};
use crate::collections::hash::{DEFAULT_CAP, KeyHasher, KeyValuePair, ModuloHasher, checked_cap};
use crate::collections::linked::SinglyLinkedList;
use crate::collections::traits::HashTable;
use crate::util::error::NoSuchElement;

/// A hash table which resolves collisions by chaining: every bucket is a [`SinglyLinkedList`] of
/// all the entries whose keys map to it.
///
/// The capacity (number of buckets) is fixed when the table is created and never changes, so
/// buckets simply grow longer as more entries are added.
///
/// [`put`](ChainedHashTable::put) always appends a new entry, without checking whether the key is
/// already present. Lookups and removals act on the first (oldest) matching entry of a bucket, so
/// a repeated key is shadowed by its original value until that value is removed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `b`: The number of entries in the bucket selected by the key.
/// - `c`: The capacity of the ChainedHashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(b)` |
/// | `get` | `O(b)` |
/// | `remove` | `O(b)` |
/// | `to_array` | `O(c + n)` |
pub struct ChainedHashTable<K, V, H = ModuloHasher> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: H,
}

pub(crate) type Bucket<K, V> = SinglyLinkedList<KeyValuePair<K, V>>;

impl<K, V> ChainedHashTable<K, V> {
    /// Creates a new ChainedHashTable with the default capacity of 10 buckets.
    pub fn new() -> ChainedHashTable<K, V> {
        ChainedHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ChainedHashTable with `cap` buckets. A `cap` of 0 is replaced by the default.
    pub fn with_cap(cap: usize) -> ChainedHashTable<K, V> {
        ChainedHashTable::with_cap_and_hasher(cap, ModuloHasher)
    }
}

impl<K, V, H> ChainedHashTable<K, V, H> {
    /// Creates a new ChainedHashTable with the default capacity and the provided `hasher`.
    pub fn with_hasher(hasher: H) -> ChainedHashTable<K, V, H> {
        ChainedHashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new ChainedHashTable with `cap` buckets and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: H) -> ChainedHashTable<K, V, H> {
        ChainedHashTable {
            buckets: iter::repeat_with(SinglyLinkedList::new).take(checked_cap(cap)).collect(),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the table, including any repeated keys.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the table.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Creates a snapshot of every value in the table, ordered by bucket and then by insertion
    /// within each bucket.
    pub fn to_array(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Removes every entry, keeping the same number of buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the table, in the same order as
    /// [`to_array`](ChainedHashTable::to_array).
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all values in the table.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Eq, V, H: KeyHasher<K>> ChainedHashTable<K, V, H> {
    /// Appends a new entry for `key` to the end of its bucket.
    pub fn put(&mut self, key: K, data: V) {
        let index = self.bucket_index(&key);

        self.buckets[index].add_last(KeyValuePair::new(key, data));
        self.len += 1;
    }

    /// Returns a reference to the value of the first entry for `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let bucket = &self.buckets[self.bucket_index(key)];

        // An empty bucket is reported by the list as EmptyList, which converts to NoSuchElement.
        bucket.find_by(|pair| pair.matches(key))?
            .map(KeyValuePair::data)
            .ok_or(NoSuchElement)
    }

    /// Returns a mutable reference to the value of the first entry for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);

        self.buckets[index].find_by_mut(|pair| pair.matches(key))?
            .map(KeyValuePair::data_mut)
            .ok_or(NoSuchElement)
    }

    /// Removes the first entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);

        let removed = self.buckets[index].remove_by(|pair| pair.matches(key))?
            .ok_or(NoSuchElement)?;

        self.len -= 1;
        Ok(removed.into_data())
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.get(key).is_ok()
    }

    /// Selects the bucket for the provided `key`.
    pub(crate) fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        <H as KeyHasher<Q>>::index(&self.hasher, key, self.cap())
    }
}

impl<K: Eq, V, H: KeyHasher<K>> HashTable<K, V> for ChainedHashTable<K, V, H> {
    fn put(&mut self, key: K, data: V) {
        ChainedHashTable::put(self, key, data)
    }

    fn get(&self, key: &K) -> Result<&V, NoSuchElement> {
        ChainedHashTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, NoSuchElement> {
        ChainedHashTable::remove(self, key)
    }

    fn to_array(&self) -> Vec<&V> {
        ChainedHashTable::to_array(self)
    }

    fn len(&self) -> usize {
        ChainedHashTable::len(self)
    }
}

impl<K, V, H: Default> Default for ChainedHashTable<K, V, H> {
    fn default() -> Self {
        ChainedHashTable::with_hasher(H::default())
    }
}

impl<K: Eq, V, H: KeyHasher<K> + Default> FromIterator<(K, V)> for ChainedHashTable<K, V, H> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ChainedHashTable::with_hasher(H::default());
        table.extend(iter);
        table
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Extend<(K, V)> for ChainedHashTable<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, data) in iter {
            self.put(key, data);
        }
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for ChainedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &self.buckets.iter().map(|b| b.to_array()).collect::<Vec<_>>())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Debug, V: Debug, H> Display for ChainedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
