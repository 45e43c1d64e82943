use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::{iter, mem};

use tracing::{Level, event};

use super::{Iter, Values};
use crate::collections::hash::{DEFAULT_CAP, KeyHasher, KeyValuePair, ModuloHasher, checked_cap};
use crate::collections::traits::HashTable;
use crate::util::error::NoSuchElement;
use crate::util::fmt::debug_slot;

const GROWTH_FACTOR: usize = 2;

/// A hash table which stores all entries in a single array of slots, resolving collisions with
/// linear probing: an entry that can't be stored at its hashed index is stored in the next empty
/// slot after it, wrapping around at the end of the array.
///
/// There is no load factor. The table only grows (doubling its capacity) when an insertion probes
/// every slot without finding an empty one, so a table can be filled completely before growing.
///
/// Removal doesn't leave a tombstone behind. Instead, every remaining entry is rehashed into a
/// freshly allocated array of the same capacity, which keeps every probe sequence intact at the
/// cost of `O(c)` work per removal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `p`: The length of the probe sequence for the key in question.
/// - `c`: The capacity of the OpenAddressingHashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(p)`, `O(c)`* |
/// | `get` | `O(p)` |
/// | `remove` | `O(c)` |
/// | `to_array` | `O(c)` |
///
/// \* If every slot is probed without finding an empty one, the table grows, rehashing all
/// entries.
pub struct OpenAddressingHashTable<K, V, H = ModuloHasher> {
    pub(crate) slots: Box<[Slot<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: H,
}

pub(crate) type Slot<K, V> = Option<KeyValuePair<K, V>>;

impl<K, V> OpenAddressingHashTable<K, V> {
    /// Creates a new OpenAddressingHashTable with the default capacity of 10 slots.
    pub fn new() -> OpenAddressingHashTable<K, V> {
        OpenAddressingHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new OpenAddressingHashTable with `cap` slots. A `cap` of 0 is replaced by the
    /// default.
    pub fn with_cap(cap: usize) -> OpenAddressingHashTable<K, V> {
        OpenAddressingHashTable::with_cap_and_hasher(cap, ModuloHasher)
    }
}

impl<K, V, H> OpenAddressingHashTable<K, V, H> {
    /// Creates a new OpenAddressingHashTable with the default capacity and the provided `hasher`.
    pub fn with_hasher(hasher: H) -> OpenAddressingHashTable<K, V, H> {
        OpenAddressingHashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new OpenAddressingHashTable with `cap` slots and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: H) -> OpenAddressingHashTable<K, V, H> {
        OpenAddressingHashTable {
            slots: empty_slots(checked_cap(cap)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of slots in the table.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Creates a snapshot of every value in the table, in slot order. This isn't insertion order.
    pub fn to_array(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Removes every entry. The capacity is kept as is.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.cap());
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the table, in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all values in the table, in slot order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns the slot after `index`, wrapping at the capacity.
    pub(crate) fn probe(&self, index: usize) -> usize {
        (index + 1) % self.cap()
    }

    /// Returns the first empty slot in the probe sequence starting at `start`, or None if a full
    /// cycle is made without finding one.
    pub(crate) fn find_open_slot(&self, start: usize) -> Option<usize> {
        let mut index = start;
        loop {
            if self.slots[index].is_none() {
                return Some(index);
            }

            index = self.probe(index);
            if index == start {
                return None;
            }
        }
    }
}

impl<K: Eq, V, H: KeyHasher<K>> OpenAddressingHashTable<K, V, H> {
    /// Associates `data` with `key`. If the key is already present, its value is overwritten in
    /// place, otherwise the entry is stored in the first open slot of its probe sequence, growing
    /// the table if there is none.
    pub fn put(&mut self, key: K, data: V) {
        if let Some(existing) = self.find_pair_mut(&key) {
            existing.set_data(data);
            return;
        }

        self.place(KeyValuePair::new(key, data));
        self.len += 1;
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.find_index_of_key(key).ok_or(NoSuchElement)?;

        self.slots[index].as_ref()
            .map(KeyValuePair::data)
            .ok_or(NoSuchElement)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.find_pair_mut(key)
            .map(KeyValuePair::data_mut)
            .ok_or(NoSuchElement)
    }

    /// Removes the entry associated with `key`, returning its value. All other entries are then
    /// rehashed into a new array of the same capacity.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, NoSuchElement>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.find_index_of_key(key).ok_or(NoSuchElement)?;
        let removed = self.slots[index].take().ok_or(NoSuchElement)?;
        self.len -= 1;

        let cap = self.cap();
        let old_slots = mem::replace(&mut self.slots, empty_slots(cap));
        self.rehash(old_slots);

        event!(Level::TRACE, cap, len = self.len, "rebuilt table after removal");

        Ok(removed.into_data())
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.find_index_of_key(key).is_some()
    }

    /// Calculates the ideal index for `key`, without considering collisions.
    pub(crate) fn hash<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        <H as KeyHasher<Q>>::index(&self.hasher, key, self.cap())
    }

    /// Finds the slot holding `key` by following its probe sequence. The search stops at the
    /// first empty slot, or after a full cycle of the table.
    pub(crate) fn find_index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let start = self.hash(key);
        let mut index = start;

        loop {
            match &self.slots[index] {
                Some(pair) if pair.matches(key) => return Some(index),
                Some(_) => {},
                None => return None,
            }

            index = self.probe(index);
            if index == start {
                return None;
            }
        }
    }

    pub(crate) fn find_pair_mut<Q>(&mut self, key: &Q) -> Option<&mut KeyValuePair<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.find_index_of_key(key)?;
        self.slots[index].as_mut()
    }

    /// Stores `pair` in the first open slot of its probe sequence. The pair's key must not already
    /// be present in the table.
    pub(crate) fn place(&mut self, pair: KeyValuePair<K, V>) {
        // The hash is recalculated after growing, because the capacity it depends on has changed.
        let index = loop {
            match self.find_open_slot(self.hash(pair.key())) {
                Some(index) => break index,
                None => self.grow(),
            }
        };

        self.slots[index] = Some(pair);
    }

    /// Doubles the capacity of the table, rehashing every entry into the new array.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap * GROWTH_FACTOR;

        event!(Level::DEBUG, old_cap, new_cap, len = self.len, "growing open addressing table");

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        self.rehash(old_slots);
    }

    /// Places every entry of `old_slots` into the current array, in their original slot order.
    pub(crate) fn rehash(&mut self, old_slots: Box<[Slot<K, V>]>) {
        for pair in old_slots.into_vec().into_iter().flatten() {
            self.place(pair);
        }
    }
}

fn empty_slots<K, V>(cap: usize) -> Box<[Slot<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<K: Eq, V, H: KeyHasher<K>> HashTable<K, V> for OpenAddressingHashTable<K, V, H> {
    fn put(&mut self, key: K, data: V) {
        OpenAddressingHashTable::put(self, key, data)
    }

    fn get(&self, key: &K) -> Result<&V, NoSuchElement> {
        OpenAddressingHashTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, NoSuchElement> {
        OpenAddressingHashTable::remove(self, key)
    }

    fn to_array(&self) -> Vec<&V> {
        OpenAddressingHashTable::to_array(self)
    }

    fn len(&self) -> usize {
        OpenAddressingHashTable::len(self)
    }
}

impl<K, V, H: Default> Default for OpenAddressingHashTable<K, V, H> {
    fn default() -> Self {
        OpenAddressingHashTable::with_hasher(H::default())
    }
}

impl<K: Eq, V, H: KeyHasher<K> + Default> FromIterator<(K, V)>
    for OpenAddressingHashTable<K, V, H>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = OpenAddressingHashTable::with_hasher(H::default());
        table.extend(iter);
        table
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Extend<(K, V)> for OpenAddressingHashTable<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, data) in iter {
            self.put(key, data);
        }
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for OpenAddressingHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressingHashTable")
            .field("slots", &self.slots.iter().map(|s| debug_slot(s.as_ref())).collect::<Vec<_>>())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Debug, V: Debug, H> Display for OpenAddressingHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
