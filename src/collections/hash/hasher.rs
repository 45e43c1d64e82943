use std::hash::{BuildHasher, Hash, RandomState};

/// Maps keys onto indices of a table with a given capacity.
///
/// Both hash tables delegate to a KeyHasher rather than hashing keys themselves, so a stronger
/// function can be swapped in without touching the table logic.
///
/// When a table is queried with a borrowed form of its keys (`K: Borrow<Q>`), the hasher must
/// produce the same index for a `K` and the `Q` it borrows as, in the same way that [`Hash`] must
/// agree across [`Borrow`](std::borrow::Borrow).
pub trait KeyHasher<K: ?Sized> {
    /// Returns an index in `0..cap` for the provided `key`. Tables never call this with a `cap`
    /// of 0.
    fn index(&self, key: &K, cap: usize) -> usize;
}

/// The default hasher: strings are hashed by their length (in chars) and integers by their value,
/// modulo the capacity.
///
/// This is intentionally coarse, e.g. all strings of equal length collide. Negative integers wrap
/// around from the end of the table, so `-1` maps to the last index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModuloHasher;

impl KeyHasher<str> for ModuloHasher {
    fn index(&self, key: &str, cap: usize) -> usize {
        key.chars().count() % cap
    }
}

impl KeyHasher<String> for ModuloHasher {
    fn index(&self, key: &String, cap: usize) -> usize {
        <ModuloHasher as KeyHasher<str>>::index(self, key.as_str(), cap)
    }
}

impl<K: ?Sized> KeyHasher<&K> for ModuloHasher
where
    ModuloHasher: KeyHasher<K>,
{
    fn index(&self, key: &&K, cap: usize) -> usize {
        <ModuloHasher as KeyHasher<K>>::index(self, *key, cap)
    }
}

macro_rules! impl_unsigned {
    ($($int:ty),*) => {
        $(
            impl KeyHasher<$int> for ModuloHasher {
                fn index(&self, key: &$int, cap: usize) -> usize {
                    (*key as u128 % cap as u128) as usize
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($int:ty),*) => {
        $(
            impl KeyHasher<$int> for ModuloHasher {
                fn index(&self, key: &$int, cap: usize) -> usize {
                    (*key as i128).rem_euclid(cap as i128) as usize
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

/// Adapts any [`BuildHasher`] into a [`KeyHasher`], for keys that implement [`Hash`].
///
/// With the default [`RandomState`], indices are no longer predictable between runs, but
/// collisions become rare.
#[derive(Debug, Default, Clone)]
pub struct StdHasher<B = RandomState>(pub B);

impl<K: Hash + ?Sized, B: BuildHasher> KeyHasher<K> for StdHasher<B> {
    fn index(&self, key: &K, cap: usize) -> usize {
        (self.0.hash_one(key) % cap as u64) as usize
    }
}
