use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;

use super::{OpenAddressingHashTable, Slot};

impl<'a, K, V, H> IntoIterator for &'a OpenAddressingHashTable<K, V, H> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.slots.iter(),
            len: self.len,
        }
    }
}

/// Iterates over the occupied slots of an [`OpenAddressingHashTable`], in index order.
pub struct Iter<'a, K, V> {
    pub(crate) inner: SliceIter<'a, Slot<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        let pair = next?.as_ref()?;
        self.len -= 1;
        Some((pair.key(), pair.data()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
