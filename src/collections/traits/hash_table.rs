use crate::util::error::NoSuchElement;

/// The operations shared by all hash tables in this crate, regardless of how they resolve
/// collisions.
///
/// Lookups and removals of a missing key fail with [`NoSuchElement`] rather than returning an
/// [`Option`], so that a missing key is always reported as an error.
pub trait HashTable<K, V> {
    /// Associates `data` with `key`. Never fails, but may grow the table.
    fn put(&mut self, key: K, data: V);

    /// Returns a reference to the value associated with `key`.
    fn get(&self, key: &K) -> Result<&V, NoSuchElement>;

    /// Removes the entry associated with `key`, returning its value.
    fn remove(&mut self, key: &K) -> Result<V, NoSuchElement>;

    /// Creates a snapshot of every stored value, in the table's natural order.
    fn to_array(&self) -> Vec<&V>;

    /// Returns the number of entries in the table.
    fn len(&self) -> usize;

    /// Returns true if the table contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if there is a value associated with `key`.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }
}
