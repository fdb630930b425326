use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Clone the list. Every element is cloned into a freshly allocated
    /// node, so the clone shares no storage with the original.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Merge another sorted list into this sorted list, leaving `other` empty.
    ///
    /// Nodes of `other` are relinked into `self`; no element is copied or
    /// reallocated. If both lists are sorted, the result is sorted, and the
    /// merge is stable: equal elements keep their relative order, with the
    /// elements of `self` before those of `other`.
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5, 7]);
    /// let mut other = List::from_iter([4, 6, 9, 10]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 4, 5, 6, 7, 9, 10]);
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b));
    }

    /// Like [`List::merge`], but with a comparison function `less`.
    ///
    /// A node of `other` is relocated before the current node of `self` only
    /// when it is strictly less, which is what keeps the merge stable.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if std::ptr::eq(self, other) {
            return;
        }
        let ghost = self.ghost_node();
        let mut pos = self.front_node();
        while pos != ghost && !other.is_empty() {
            // SAFETY: `pos` is a valid non-ghost node of `self`, and the
            // nodes visited below are valid non-ghost nodes of `other`.
            unsafe {
                let front = other.front_node();
                if less(&front.as_ref().element, &pos.as_ref().element) {
                    // Take the longest run at the front of `other` that
                    // goes before `pos`, and relink it in one step.
                    let mut back = front;
                    let mut run = 1;
                    loop {
                        let next = back.as_ref().next;
                        if next == other.ghost_node()
                            || !less(&next.as_ref().element, &pos.as_ref().element)
                        {
                            break;
                        }
                        back = next;
                        run += 1;
                    }
                    let detached = other.detach_nodes(front, back, run);
                    self.attach_nodes(pos.as_ref().prev, pos, detached);
                } else {
                    pos = pos.as_ref().next;
                }
            }
        }
        self.append(other);
    }

    /// Reverse the order of the elements in place.
    ///
    /// Only the links are rewired; no element is moved or copied, so
    /// references obtained through a previous iteration order stay valid.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..5);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![4, 3, 2, 1, 0]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }
        let ghost = self.ghost_node();
        let mut node = ghost;
        // Swap the `next` and `prev` links of every node, the ghost
        // node included.
        loop {
            // SAFETY: all the links of a well-formed cyclic list are valid.
            let next = unsafe { node.as_ref().next };
            unsafe {
                let node = node.as_mut();
                std::mem::swap(&mut node.next, &mut node.prev);
            }
            node = next;
            if node == ghost {
                break;
            }
        }
    }

    /// Remove every element that is equal to the element right before it,
    /// keeping the first of each run of consecutive equal elements.
    ///
    /// Equal elements that are not adjacent are all kept, so on an unsorted
    /// list this is not a global deduplication.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 2, 1, 2, 2, 2, 3, 3, 4, 1]);
    /// list.unique();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 2, 3, 4, 1]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        self.unique_by(|a, b| a == b);
    }

    /// Like [`List::unique`], but with an equivalence function `same`.
    ///
    /// An element is removed when `same(previous, element)` returns `true`,
    /// where `previous` is the element before it that survived.
    pub fn unique_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len() < 2 {
            return;
        }
        let ghost = self.ghost_node();
        let mut prev = self.front_node();
        // SAFETY: the walk only steps through valid links, and every node
        // passed to `detach_node` is a non-ghost node of this list.
        let mut node = unsafe { prev.as_ref().next };
        while node != ghost {
            let next = unsafe { node.as_ref().next };
            let duplicate = unsafe { same(&prev.as_ref().element, &node.as_ref().element) };
            if duplicate {
                drop(unsafe { self.detach_node(node) });
            } else {
                prev = node;
            }
            node = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn list_equality_checks_length_first() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2]);
        let c = List::from_iter([1, 2, 3]);
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn list_clone_is_deep() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        copy.push_back(4);
        *copy.front_mut().unwrap() = 9;
        assert_eq!(Vec::from_iter(original), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(copy), vec![9, 2, 3, 4]);
    }

    #[test]
    fn list_ordering() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 3]);
        assert!(a < b);
        assert!(List::<i32>::new() < a);
    }

    #[test]
    fn list_merge() {
        let mut list = List::from_iter([1, 3, 5, 7]);
        let mut other = List::from_iter([4, 6, 9, 10]);
        list.merge(&mut other);
        assert!(other.is_empty());
        assert_eq!(
            Vec::from_iter(list),
            vec![1, 3, 4, 5, 6, 7, 9, 10]
        );
    }

    #[test]
    fn list_merge_empty_sides() {
        let mut list = List::from_iter([1, 2]);
        let mut empty = List::new();
        list.merge(&mut empty);
        assert_eq!(Vec::from_iter(list.iter().cloned()), vec![1, 2]);

        let mut empty = List::new();
        let mut other = List::from_iter([1, 2]);
        empty.merge(&mut other);
        assert!(other.is_empty());
        assert_eq!(Vec::from_iter(empty), vec![1, 2]);
    }

    #[test]
    fn list_merge_is_stable() {
        // Pairs are ordered by key only; the id records the origin.
        let mut list = List::from_iter([(1, 'a'), (2, 'a'), (4, 'a')]);
        let mut other = List::from_iter([(1, 'b'), (2, 'b'), (3, 'b')]);
        list.merge_by(&mut other, |x, y| x.0 < y.0);
        assert_eq!(
            Vec::from_iter(list),
            vec![
                (1, 'a'),
                (1, 'b'),
                (2, 'a'),
                (2, 'b'),
                (3, 'b'),
                (4, 'a')
            ]
        );
    }

    #[test]
    fn list_reverse() {
        let mut list = List::from_iter(0..5);
        list.reverse();
        assert_eq!(Vec::from_iter(list.iter().cloned()), vec![4, 3, 2, 1, 0]);
        list.reverse();
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..5));

        let mut empty = List::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = List::from_iter([7]);
        single.reverse();
        assert_eq!(Vec::from_iter(single), vec![7]);
    }

    #[test]
    fn list_reverse_then_iterate_backward() {
        let mut list = List::from_iter(0..4);
        list.reverse();
        let backward = Vec::from_iter(list.iter().rev().cloned());
        assert_eq!(backward, Vec::from_iter(0..4));
    }

    #[test]
    fn list_unique() {
        let mut list = List::from_iter([2, 2, 1, 2, 2, 2, 3, 3, 4, 1]);
        list.unique();
        assert_eq!(Vec::from_iter(list), vec![2, 1, 2, 3, 4, 1]);

        let mut all_same = List::from_iter([5, 5, 5, 5]);
        all_same.unique();
        assert_eq!(Vec::from_iter(all_same), vec![5]);

        let mut empty = List::<i32>::new();
        empty.unique();
        assert!(empty.is_empty());
    }

    #[test]
    fn list_unique_by() {
        let mut list = List::from_iter([1, -1, 2, -2, -2, 3]);
        list.unique_by(|a: &i32, b: &i32| a.abs() == b.abs());
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(0..3);
        assert!(list.contains(&0));
        assert!(!list.contains(&10));
    }
}
