use std::iter::FromIterator;

use crate::error::Error;
use crate::list::List;

/// A last-in-first-out adapter over [`List`].
///
/// The top of the stack is the back of the underlying list, so
/// [`push`](Stack::push) and [`pop`](Stack::pop) both compute in
/// *O*(1) time. No indexing or traversal is exposed; element access
/// beyond the top goes through [`into_inner`](Stack::into_inner).
///
/// # Examples
///
/// ```
/// use chainlist::Stack;
/// use std::iter::FromIterator;
///
/// let mut stack = Stack::from_iter([1, 2, 3]);
/// assert_eq!(stack.top(), Ok(&3));
///
/// stack.push(4);
/// assert_eq!(stack.pop(), Some(4));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Return a reference to the most recently pushed element, or
    /// [`Error::EmptyAccess`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::{Error, Stack};
    ///
    /// let mut stack = Stack::new();
    /// assert_eq!(stack.top(), Err(Error::EmptyAccess));
    ///
    /// stack.push(1);
    /// assert_eq!(stack.top(), Ok(&1));
    /// ```
    pub fn top(&self) -> Result<&T, Error> {
        self.list.back()
    }

    /// Return a mutable reference to the most recently pushed element,
    /// or [`Error::EmptyAccess`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, Error> {
        self.list.back_mut()
    }

    /// Push an element onto the stack.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Like [`Stack::push`], but report allocation failure as
    /// [`Error::NodeAlloc`] instead of aborting.
    pub fn try_push(&mut self, item: T) -> Result<(), Error> {
        self.list.try_push_back(item)
    }

    /// Remove the most recently pushed element and return it, or return
    /// `None` if the stack is empty. Popping from an empty stack emits
    /// a warning through the [`log`] facade, like [`List::pop_back`].
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns `true` if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Return the number of elements in the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Swap the contents of two stacks without moving any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.list.swap(&mut other.list);
    }

    /// Consume the stack and return the underlying list, bottom first.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::Stack;
    /// use std::iter::FromIterator;
    ///
    /// let stack = Stack::from_iter([1, 2, 3]);
    /// assert_eq!(Vec::from_iter(stack.into_inner()), vec![1, 2, 3]);
    /// ```
    pub fn into_inner(self) -> List<T> {
        self.list
    }
}

/// Adopt a list as a stack. The back of the list becomes the top.
impl<T> From<List<T>> for Stack<T> {
    fn from(list: List<T>) -> Self {
        Self { list }
    }
}

/// Build a stack by cloning the elements of a list, leaving it untouched.
impl<T: Clone> From<&List<T>> for Stack<T> {
    fn from(list: &List<T>) -> Self {
        Self { list: list.clone() }
    }
}

/// Push the elements in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}
