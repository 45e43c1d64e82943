use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;

use super::{Bucket, ChainedHashTable};
use crate::collections::hash::KeyValuePair;
use crate::collections::linked::list::Iter as ListIter;

impl<'a, K, V, H> IntoIterator for &'a ChainedHashTable<K, V, H> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            len: self.len,
        }
    }
}

/// Iterates over the entries of a [`ChainedHashTable`] bucket by bucket, front to back.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: SliceIter<'a, Bucket<K, V>>,
    pub(crate) current: Option<ListIter<'a, KeyValuePair<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(|bucket| bucket.next()) {
                self.len -= 1;
                return Some((pair.key(), pair.data()));
            }

            // Move on to the next bucket, stopping once they've all been visited.
            self.current = Some(self.buckets.next()?.iter());
        }
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
