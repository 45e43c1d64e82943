#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when dropped. Cloning shares the counter, so a
/// collection of clones can be used to count exactly how many values a collection has dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far, including the ones of other clones.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
