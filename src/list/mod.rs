use std::alloc::{handle_alloc_error, Layout};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::warn;

use crate::error::Error;
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list.
/// It allows inserting, removing elements at any given position in constant time.
/// In compromise, accessing or mutating elements at any position take *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` that points to the ghost node;
/// - a length field `len`, kept equal to the number of element nodes at all
///   times, so [`List::len`] is *O*(1).
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

/// Nodes fragment detached from a list, used in list splitting or
/// splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link `prev` and `next` to each other, in both directions.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() }).cast()
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() }).cast()
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), or whether it belongs
    /// to the list.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Construct a list from detached nodes.
    ///
    /// It is safe because the detached nodes is guaranteed to be a valid range
    /// when construction.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        unsafe {
            list.attach_nodes(list.ghost_node(), list.ghost_node(), detached);
        }
        list
    }

    /// Like [`List::detach_all_nodes`], but consume the list.
    pub(crate) fn into_detached(mut self) -> Option<DetachedNodes<T>> {
        self.detach_all_nodes()
    }

    /// Remove the first element without the empty-pop warning. Internal
    /// callers (`clear`, draining iterators) exhaust the list on purpose.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Remove the last element without the empty-pop warning.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Detach the first `min(n, len)` nodes as a new list, in *O*(*n*) time.
    ///
    /// The relative order of the detached nodes is preserved. Used by the
    /// merge sort to slice the chain into runs without copying elements.
    pub(crate) fn cut_front(&mut self, n: usize) -> Self {
        if n >= self.len {
            return std::mem::take(self);
        }
        if n == 0 {
            return List::new();
        }
        let front = self.front_node();
        let mut back = front;
        // `n` is in `1..len`, so the walk stays inside element nodes.
        unsafe {
            for _ in 1..n {
                back = back.as_ref().next;
            }
            List::from_detached(self.detach_nodes(front, back, n))
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use chainlist::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        let len = 0;
        let _marker = PhantomData;
        Self { ghost, len, _marker }
    }

    /// Create a `List` with `n` default-constructed elements.
    ///
    /// # Examples
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list: List<u32> = List::with_size(3);
    /// assert_eq!(Vec::from_iter(list), vec![0, 0, 0]);
    /// ```
    pub fn with_size(n: usize) -> Self
    where
        T: Default,
    {
        let mut list = List::new();
        for _ in 0..n {
            list.push_back(T::default());
        }
        list
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the largest length representable by the size type.
    ///
    /// Informational only; no operation enforces it.
    #[inline]
    pub fn max_size(&self) -> usize {
        usize::MAX
    }

    /// Removes all elements from the `List`. A no-op on an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.take_front().is_some() {}
    }

    /// Provides a reference to the front element, or [`Error::EmptyAccess`]
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::EmptyAccess));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.cursor_start().current().ok_or(Error::EmptyAccess)
    }

    /// Provides a mutable reference to the front element, or
    /// [`Error::EmptyAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front().is_err());
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyAccess);
        }
        let mut node = self.front_node();
        // SAFETY: the list is not empty, so the front node is an element node.
        Ok(unsafe { &mut node.as_mut().element })
    }

    /// Provides a reference to the back element, or [`Error::EmptyAccess`]
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::EmptyAccess));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.cursor_end().previous().ok_or(Error::EmptyAccess)
    }

    /// Provides a mutable reference to the back element, or
    /// [`Error::EmptyAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.back().is_err());
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    ///
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyAccess);
        }
        let mut node = self.back_node();
        // SAFETY: the list is not empty, so the back node is an element node.
        Ok(unsafe { &mut node.as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// Aborts on allocation failure, like the std containers; see
    /// [`List::try_push_front`] for the fallible variant.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Adds an element first in the list, reporting allocation failure
    /// as [`Error::NodeAlloc`] instead of aborting. On failure the list
    /// is unchanged and the element is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), Error> {
        self.cursor_start_mut().try_insert(elt)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. Popping an empty list logs a warning and leaves the list
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            warn!("`pop_front` on an empty list");
            return None;
        }
        self.take_front()
    }

    /// Appends an element to the back of a list.
    ///
    /// Aborts on allocation failure, like the std containers; see
    /// [`List::try_push_back`] for the fallible variant.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Appends an element to the back of a list, reporting allocation
    /// failure as [`Error::NodeAlloc`] instead of aborting. On failure
    /// the list is unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), Error> {
        self.cursor_end_mut().try_insert(elt)
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty. Popping an empty list logs a warning and leaves the
    /// list unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            warn!("`pop_back` on an empty list");
            return None;
        }
        self.take_back()
    }

    /// Exchange the contents of two lists without touching any element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1, 2]);
    /// let mut b = List::from_iter([3, 4, 5]);
    ///
    /// a.swap(&mut b);
    /// assert_eq!(Vec::from_iter(a), vec![3, 4, 5]);
    /// assert_eq!(Vec::from_iter(b), vec![1, 2]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        // The ghost nodes are boxed, so the element links into them
        // stay valid after the owners trade places.
        std::mem::swap(self, other);
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the "ghost" node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is pointing to the "ghost" node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.front_node(), 0)
    }

    /// Provides a cursor with editing operations at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.ghost_node(), self.len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list2.prepend(&mut list1);
    ///
    /// let mut iter = list2.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.ghost_node()` and `self.front_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.ghost_node(), self.front_node(), detached) }
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// let mut split = list.split_off(2);
    ///
    /// assert_eq!(split.pop_front(), Some(1));
    /// assert_eq!(split.pop_front(), None);
    /// ```
    pub fn split_off(&mut self, at: usize) -> List<T> {
        assert!(at <= self.len, "Cannot split off at a nonexistent index");
        if at == self.len {
            return List::new();
        }
        self.cursor_mut(at).split().unwrap_or_default()
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 3);
    /// assert_eq!(list.remove(0), 1);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "Cannot remove at an index outside of the list bounds"
        );
        self.cursor_mut(at)
            .remove()
            .expect("Cannot remove at an index outside of the list bounds")
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elm: T) {
        assert!(
            at <= self.len,
            "Cannot insert at an index outside of the list bounds"
        );
        self.cursor_mut(at).insert(elm);
    }

    /// Splices another list at the given index: the entire chain of `other`
    /// is relinked into `self` immediately before the node at `at`, without
    /// copying any element. `other` is consumed.
    ///
    /// Splicing into an empty list, or at `at == len`, works like the
    /// general case; the relink itself is *O*(1).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time (seeking to `at`).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let other = List::from_iter([4, 5, 6]);
    ///
    /// list.splice_at(2, other);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 5, 6, 3]);
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) {
        assert!(at <= self.len, "Cannot splice at a nonexistent node");
        let mut cursor_mut = self.cursor_start_mut();
        cursor_mut
            .seek_forward(at)
            .expect("Cannot splice at a nonexistent node");
        cursor_mut.splice(other);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element, aborting on allocation
    /// failure like `Box::new`.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        Self::try_new_detached(element)
            .unwrap_or_else(|_| handle_alloc_error(Layout::new::<Node<T>>()))
    }

    /// Create a detached node with given element, or report
    /// [`Error::NodeAlloc`] when the allocator returns null.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>, Error> {
        #[cfg(test)]
        {
            if alloc_failure::take() {
                return Self::init_detached(std::ptr::null_mut(), element);
            }
        }
        // `Node<T>` is never zero-sized (it carries two pointers), so a
        // raw global allocation with its layout is valid.
        let layout = Layout::new::<Node<T>>();
        let ptr = unsafe { std::alloc::alloc(layout) } as *mut Node<T>;
        Self::init_detached(ptr, element)
    }

    /// Initialize a freshly allocated node with `element`, mapping a null
    /// allocation to [`Error::NodeAlloc`]. On failure `element` is dropped.
    fn init_detached(ptr: *mut Node<T>, element: T) -> Result<NonNull<Node<T>>, Error> {
        let node = NonNull::new(ptr).ok_or(Error::NodeAlloc)?;
        // `next` and `prev` stay uninitialized until the node is attached;
        // they are never read while the node is detached.
        unsafe {
            std::ptr::addr_of_mut!((*node.as_ptr()).element).write(element);
        }
        Ok(node)
    }

    /// Consume a detached boxed node, returning its element.
    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        let _marker = PhantomData;
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker,
        }
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY:
    // - the node was allocated through the global allocator with the
    //   layout of `Node<Erased>`, so boxing it back is valid;
    // - `ghost.next` and `ghost.prev` are initialized immediately below;
    // - `ghost.element` is zero-sized and never read.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}


#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_with_size() {
        let list: List<u32> = List::with_size(4);
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|x| *x == 0));

        let list: List<u32> = List::with_size(0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_max_size_is_informational() {
        let list: List<u8> = List::new();
        assert_eq!(list.max_size(), usize::MAX);
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(Error::EmptyAccess));
        assert_eq!(list.back(), Err(Error::EmptyAccess));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), Err(Error::EmptyAccess));
        assert_eq!(list.back(), Err(Error::EmptyAccess));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_try_push() {
        let mut list = List::new();
        assert_eq!(list.try_push_back(1), Ok(()));
        assert_eq!(list.try_push_front(0), Ok(()));
        assert_eq!(list.try_push_back(2), Ok(()));
        assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    }

    #[test]
    fn list_try_push_alloc_failure() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));

        super::alloc_failure::arm();
        assert_eq!(
            list.try_push_back(DropChecker::new(2, &dropped)),
            Err(Error::NodeAlloc)
        );
        // the rejected element is dropped, the list is unchanged
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front().unwrap().value, 1);

        // the switch is one-shot, later pushes allocate normally
        assert_eq!(list.try_push_front(DropChecker::new(3, &dropped)), Ok(()));
        assert_eq!(list.len(), 2);
        assert_eq!(list.front().unwrap().value, 3);
    }

    #[test]
    fn list_size_tracks_traversal() {
        // The counter always equals the walked length, through an
        // arbitrary sequence of end operations.
        let mut list = List::new();
        let ops: &[(bool, bool)] = &[
            (true, true),
            (true, false),
            (false, true),
            (true, true),
            (true, false),
            (false, false),
            (false, true),
            (false, false),
            (false, false),
        ];
        let mut value = 0;
        for &(push, front) in ops {
            match (push, front) {
                (true, true) => list.push_front(value),
                (true, false) => list.push_back(value),
                (false, true) => {
                    list.pop_front();
                }
                (false, false) => {
                    list.pop_back();
                }
            }
            value += 1;
            assert_eq!(list.iter().count(), list.len());
            assert_eq!(list.iter().rev().count(), list.len());
        }
    }

    #[test]
    fn list_clear_on_empty_is_noop() {
        let mut list = List::<i32>::new();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(1);
        list.clear();
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_swap_is_self_inverse() {
        let mut a = List::from_iter(0..5);
        let mut b = List::from_iter(10..12);
        let (a0, b0) = (a.clone(), b.clone());

        a.swap(&mut b);
        assert_eq!(a, b0);
        assert_eq!(b, a0);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 5);

        a.swap(&mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        // swapping still leaves both lists fully linked
        a.push_back(5);
        b.push_front(9);
        assert_eq!(Vec::from_iter(a), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(Vec::from_iter(b), vec![9, 10, 11]);
    }

    #[test]
    fn list_insert_and_remove() {
        fn list_eq<T, I>(list: &List<T>, expected: I)
        where
            T: Debug + Clone + Eq,
            I: IntoIterator<Item = T>,
        {
            assert_eq!(
                Vec::from_iter(list.iter().cloned()),
                Vec::from_iter(expected)
            );
        }

        let mut list = List::from_iter(0..10);
        list.insert(5, 10);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), 9);
        assert_eq!(list.back(), Ok(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11);
        assert_eq!(list.front(), Ok(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), 11);
        assert_eq!(list.front(), Ok(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12);
        assert_eq!(list.back(), Ok(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn list_split_and_append() {
        fn test_case<T, I1, I2, I3>(list: I1, other: I2, at: usize, appended: I3)
        where
            T: Clone + Eq + Debug,
            I1: IntoIterator<Item = T>,
            I2: IntoIterator<Item = T>,
            I3: IntoIterator<Item = T>,
        {
            let mut list = List::from_iter(list);
            let other = List::from_iter(other);
            let appended = List::from_iter(appended);

            let cloned = list.clone();
            let mut other_cloned = other.clone();

            list.append(&mut other_cloned);
            assert!(other_cloned.is_empty());
            assert_eq!(list, appended);
            assert_eq!(list.len(), cloned.len() + other.len());

            let split = list.split_off(at);
            assert_eq!(list, cloned);
            assert_eq!(split, other.clone());
            assert_eq!(list.len(), cloned.len());

            let (mut list, other) = (other, list);
            let cloned = list.clone();
            let mut other_cloned = other.clone();

            list.prepend(&mut other_cloned);
            assert!(other_cloned.is_empty());
            assert_eq!(list, appended);
            assert_eq!(list.len(), cloned.len() + other.len());

            let split = list.split_off(at);
            assert_eq!(list, other);
            assert_eq!(split, cloned);
        }
        test_case(0..5, 5..7, 5, 0..7);
        test_case(0..5, None, 5, 0..5);
        test_case(0..5, 5..6, 5, 0..6);
        test_case(0..1, 1..3, 1, 0..3);
        test_case(0..1, None, 1, 0..1);
        test_case(0..1, 1..2, 1, 0..2);
        test_case(None, 0..2, 0, 0..2);
        test_case::<i32, _, _, _>(None, None, 0, None);
        test_case(None, 0..1, 0, 0..1);
    }

    #[test]
    fn list_splice() {
        fn test_case<T, I1, I2, I3>(list: I1, other: I2, at: usize, spliced: I3)
        where
            T: Clone + Eq + Debug,
            I1: IntoIterator<Item = T>,
            I2: IntoIterator<Item = T>,
            I3: IntoIterator<Item = T>,
        {
            let mut list = List::from_iter(list);
            let other = List::from_iter(other);
            let spliced = List::from_iter(spliced);

            list.splice_at(at, other.clone());
            assert_eq!(list, spliced);
            assert_eq!(list.len(), spliced.len());
        }
        test_case(0..5, 5..7, 5, 0..7);
        test_case(0..5, 5..7, 2, (0..2).chain(5..7).chain(2..5));
        test_case(0..5, 5..7, 0, (5..7).chain(0..5));
        test_case(0..5, Some(5), 5, 0..6);
        test_case(0..5, Some(5), 2, (0..2).chain(Some(5)).chain(2..5));
        test_case(0..5, Some(5), 0, Some(5).into_iter().chain(0..5));
        test_case(Some(0), 1..3, 1, 0..3);
        test_case(Some(0), 1..3, 0, (1..3).chain(Some(0)));
        test_case(None, 0..2, 0, 0..2);
        test_case(None, Some(0), 0, Some(0));
        test_case::<i32, _, _, _>(None, None, 0, None);

        // the documented splice example: B before index 1 of A
        let mut a = List::from_iter([1, 2, 3, 4, 5]);
        let b = List::from_iter([6, 7, 8, 9]);
        a.splice_at(1, b);
        assert_eq!(Vec::from_iter(a), vec![1, 6, 7, 8, 9, 2, 3, 4, 5]);
    }

    #[test]
    fn list_cut_front() {
        let mut list = List::from_iter(0..6);
        let head = list.cut_front(2);
        assert_eq!(Vec::from_iter(head), vec![0, 1]);
        assert_eq!(list.len(), 4);

        let all = list.cut_front(10);
        assert_eq!(Vec::from_iter(all), vec![2, 3, 4, 5]);
        assert!(list.is_empty());

        let none = list.cut_front(3);
        assert!(none.is_empty());
    }

    #[test]
    fn list_len() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.append(&mut List::from_iter(0..5));
        assert_eq!(list.len(), 5);

        list.remove(3);
        assert_eq!(list.len(), 4);

        list.splice_at(3, List::from_iter(5..7));
        assert_eq!(list.len(), 6);

        let other = list.split_off(4);
        assert_eq!(list.len(), 4);
        assert_eq!(other.len(), 2);

        list.prepend(&mut List::from_iter(7..10));
        assert_eq!(list.len(), 7);

        list.clear();
        assert_eq!(list.len(), 0);
    }
}
