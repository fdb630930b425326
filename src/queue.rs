use std::iter::FromIterator;

use crate::error::Error;
use crate::list::List;

/// A first-in-first-out adapter over [`List`].
///
/// Elements enter at the back of the underlying list and leave from the
/// front, so [`push`](Queue::push) and [`pop`](Queue::pop) both compute
/// in *O*(1) time. No indexing or traversal is exposed; element access
/// beyond the two ends goes through [`into_inner`](Queue::into_inner).
///
/// # Examples
///
/// ```
/// use chainlist::Queue;
/// use std::iter::FromIterator;
///
/// let mut queue = Queue::from_iter([1, 2, 3]);
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.back(), Ok(&3));
///
/// queue.push(4);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Return a reference to the oldest element, or
    /// [`Error::EmptyAccess`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::{Error, Queue};
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), Err(Error::EmptyAccess));
    ///
    /// queue.push(1);
    /// assert_eq!(queue.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, Error> {
        self.list.front()
    }

    /// Return a mutable reference to the oldest element, or
    /// [`Error::EmptyAccess`] if the queue is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.list.front_mut()
    }

    /// Return a reference to the most recently pushed element, or
    /// [`Error::EmptyAccess`] if the queue is empty.
    pub fn back(&self) -> Result<&T, Error> {
        self.list.back()
    }

    /// Return a mutable reference to the most recently pushed element,
    /// or [`Error::EmptyAccess`] if the queue is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.list.back_mut()
    }

    /// Push an element to the back of the queue.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Like [`Queue::push`], but report allocation failure as
    /// [`Error::NodeAlloc`] instead of aborting.
    pub fn try_push(&mut self, item: T) -> Result<(), Error> {
        self.list.try_push_back(item)
    }

    /// Remove the oldest element and return it, or return `None` if the
    /// queue is empty. Popping from an empty queue emits a warning
    /// through the [`log`] facade, like [`List::pop_front`].
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns `true` if the queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Return the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Swap the contents of two queues without moving any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.list.swap(&mut other.list);
    }

    /// Consume the queue and return the underlying list, oldest first.
    pub fn into_inner(self) -> List<T> {
        self.list
    }
}

/// Adopt a list as a queue. The front of the list becomes the front
/// of the queue.
impl<T> From<List<T>> for Queue<T> {
    fn from(list: List<T>) -> Self {
        Self { list }
    }
}

/// Build a queue by cloning the elements of a list, leaving it untouched.
impl<T: Clone> From<&List<T>> for Queue<T> {
    fn from(list: &List<T>) -> Self {
        Self { list: list.clone() }
    }
}

/// Push the elements in iteration order, so the first one is popped first.
impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;
    use crate::error::Error;
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn queue_ends_on_empty_are_errors() {
        let mut queue = Queue::<i32>::new();
        assert_eq!(queue.front(), Err(Error::EmptyAccess));
        assert_eq!(queue.back(), Err(Error::EmptyAccess));
        assert_eq!(queue.front_mut(), Err(Error::EmptyAccess));
        assert_eq!(queue.back_mut(), Err(Error::EmptyAccess));
    }

    #[test]
    fn queue_tracks_both_ends() {
        let mut queue = Queue::from_iter([1, 2]);
        assert_eq!(queue.front(), Ok(&1));
        assert_eq!(queue.back(), Ok(&2));

        queue.push(3);
        assert_eq!(queue.back(), Ok(&3));

        *queue.front_mut().unwrap() = 10;
        assert_eq!(queue.pop(), Some(10));
        assert_eq!(queue.front(), Ok(&2));
    }

    #[test]
    fn queue_try_push() {
        let mut queue = Queue::new();
        assert_eq!(queue.try_push(1), Ok(()));
        assert_eq!(queue.back(), Ok(&1));
    }

    #[test]
    fn queue_from_list() {
        let list = List::from_iter([1, 2, 3]);

        let mut borrowed = Queue::from(&list);
        assert_eq!(borrowed.pop(), Some(1));
        // the source list is untouched
        assert_eq!(list.len(), 3);

        let mut owned = Queue::from(list);
        assert_eq!(owned.pop(), Some(1));
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn queue_swap() {
        let mut a = Queue::from_iter([1]);
        let mut b = Queue::from_iter([2, 3]);
        a.swap(&mut b);
        assert_eq!(a.len(), 2);
        assert_eq!(b.front(), Ok(&1));
    }

    #[test]
    fn queue_round_trips_through_list() {
        let queue = Queue::from_iter(0..5);
        assert_eq!(Vec::from_iter(queue.into_inner()), Vec::from_iter(0..5));
    }
}
