use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::{EmptyList, ListError, NoSuchElement};

/// A list with links in one direction, from the front to the back.
///
/// Operations which can only be performed on a non-empty list return [`EmptyList`] rather than
/// panicking. Anchored operations (such as [`add_after`](SinglyLinkedList::add_after)) report a
/// missing anchor with [`NoSuchElement`], combined with the former as a [`ListError`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get_first` | `O(1)` |
/// | `get_last` | `O(n)` |
/// | `add_first` | `O(1)` |
/// | `remove_first` | `O(1)` |
/// | `add_last` | `O(n)` |
/// | `remove_last` | `O(n)` |
/// | `add_before/after` | `O(i)` |
/// | `remove_before/after` | `O(i)` |
/// | `find` | `O(i)` |
/// | `remove` | `O(i)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn get_first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn get_first_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn get_last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Adds the provided element to the front of the list.
    pub fn add_first(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it.
    pub fn remove_first(&mut self) -> Result<T, EmptyList> {
        let node = self.head.take().ok_or(EmptyList)?;
        let Node { value, next } = *node;

        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Adds the provided element to the back of the list.
    pub fn add_last(&mut self, value: T) {
        let tail = self.tail_link();
        *tail = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the last element from the list and returns it.
    pub fn remove_last(&mut self) -> Result<T, EmptyList> {
        let last = self.len.checked_sub(1).ok_or(EmptyList)?;
        self.remove_at(last).map_err(|NoSuchElement| EmptyList)
    }

    /// Inserts `value` directly before the first element for which `predicate` returns true.
    pub fn add_before_by<F>(&mut self, value: T, predicate: F) -> Result<(), ListError>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.checked_position(predicate)?;
        Ok(self.insert_at(index, value)?)
    }

    /// Inserts `value` directly after the first element for which `predicate` returns true.
    pub fn add_after_by<F>(&mut self, value: T, predicate: F) -> Result<(), ListError>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.checked_position(predicate)?;
        Ok(self.insert_at(index + 1, value)?)
    }

    /// Removes the element directly before the first element for which `predicate` returns true.
    /// Fails with [`NoSuchElement`] if that element is the head of the list.
    pub fn remove_before_by<F>(&mut self, predicate: F) -> Result<T, ListError>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.checked_position(predicate)?;
        let before = index.checked_sub(1).ok_or(NoSuchElement)?;
        Ok(self.remove_at(before)?)
    }

    /// Removes the element directly after the first element for which `predicate` returns true.
    /// Fails with [`NoSuchElement`] if that element is the tail of the list.
    pub fn remove_after_by<F>(&mut self, predicate: F) -> Result<T, ListError>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.checked_position(predicate)?;
        Ok(self.remove_at(index + 1)?)
    }

    /// Returns the first element for which `predicate` returns true. Searching an empty list is
    /// an error, while finding no match in a non-empty one isn't.
    pub fn find_by<F>(&self, mut predicate: F) -> Result<Option<&T>, EmptyList>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() { return Err(EmptyList); }

        Ok(self.iter().find(|element| predicate(*element)))
    }

    /// The same as [`find_by`](SinglyLinkedList::find_by), returning a mutable reference.
    pub fn find_by_mut<F>(&mut self, mut predicate: F) -> Result<Option<&mut T>, EmptyList>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() { return Err(EmptyList); }

        Ok(self.iter_mut().find(|element| predicate(&**element)))
    }

    /// Removes and returns the first element for which `predicate` returns true. As with
    /// [`find_by`](SinglyLinkedList::find_by), only an empty list is an error.
    pub fn remove_by<F>(&mut self, predicate: F) -> Result<Option<T>, EmptyList>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() { return Err(EmptyList); }

        match self.iter().position(predicate) {
            Some(index) => Ok(self.remove_at(index).ok()),
            None => Ok(None),
        }
    }

    /// Creates a snapshot of the list's elements, from front to back.
    pub fn to_array(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        *self = SinglyLinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Inserts `value` directly before the first element equal to `before`.
    pub fn add_before(&mut self, value: T, before: &T) -> Result<(), ListError> {
        self.add_before_by(value, |element| element == before)
    }

    /// Inserts `value` directly after the first element equal to `after`.
    pub fn add_after(&mut self, value: T, after: &T) -> Result<(), ListError> {
        self.add_after_by(value, |element| element == after)
    }

    /// Removes the element directly before the first element equal to `before`.
    pub fn remove_before(&mut self, before: &T) -> Result<T, ListError> {
        self.remove_before_by(|element| element == before)
    }

    /// Removes the element directly after the first element equal to `after`.
    pub fn remove_after(&mut self, after: &T) -> Result<T, ListError> {
        self.remove_after_by(|element| element == after)
    }

    /// Returns the first element equal to `item`.
    pub fn find(&self, item: &T) -> Result<Option<&T>, EmptyList> {
        self.find_by(|element| element == item)
    }

    /// Removes and returns the first element equal to `item`.
    pub fn remove(&mut self, item: &T) -> Result<Option<T>, EmptyList> {
        self.remove_by(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Returns the link which currently terminates the list.
    pub(crate) fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Returns the link that owns the node at `index`, or the terminating link if `index` is equal
    /// to the length. None is returned for any index further than that.
    pub(crate) fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    pub(crate) fn insert_at(&mut self, index: usize, value: T) -> Result<(), NoSuchElement> {
        let link = self.link_at(index).ok_or(NoSuchElement)?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<T, NoSuchElement> {
        let link = self.link_at(index).ok_or(NoSuchElement)?;
        let node = link.take().ok_or(NoSuchElement)?;
        let Node { value, next } = *node;

        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Finds the index of the first element matching `predicate`, distinguishing between an empty
    /// list and a missing element.
    pub(crate) fn checked_position<F>(&self, predicate: F) -> Result<usize, ListError>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() { return Err(EmptyList.into()); }

        Ok(self.iter().position(predicate).ok_or(NoSuchElement)?)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.tail_link();

        for value in iter {
            let node = link.insert(Node::boxed(value, None));
            link = &mut node.next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively, otherwise dropping a long list recurses once per node.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.to_array())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
