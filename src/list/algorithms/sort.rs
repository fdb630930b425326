use crate::list::List;
use std::cmp::Ordering;

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(1) extra memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a bottom-up merge sort. Sorted runs of
    /// doubling width are cut off the front of the list and merged
    /// pairwise by relinking nodes, without recursion and without
    /// temporary storage for elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn't implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn't contain a `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from([5, 4, 1, 3, 2]);
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(list.iter().cloned()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sort the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }
}

/// Bottom-up merge sort by node relinking.
///
/// In every pass, the list is consumed from the front in runs of `width`
/// nodes. Adjacent runs are sorted from the previous pass (trivially so
/// when `width == 1`), so merging them pairwise yields sorted runs of
/// `2 * width`, and the pass with `width >= len` leaves the whole list
/// sorted. [`List::merge_by`] keeps equal elements of the earlier run in
/// front, which makes the sort stable.
fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = list.len();
    if len < 2 {
        return;
    }
    let mut width = 1;
    while width < len {
        let mut rest = std::mem::take(list);
        while !rest.is_empty() {
            let mut run = rest.cut_front(width);
            let mut next_run = rest.cut_front(width);
            run.merge_by(&mut next_run, &mut less);
            list.append(&mut run);
        }
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    fn is_sorted(vec: &[i32]) -> bool {
        vec.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn sort_trivial_lists() {
        let mut empty = List::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = List::from_iter([1]);
        single.sort();
        assert_eq!(Vec::from_iter(single), vec![1]);

        let mut sorted = List::from_iter(0..10);
        sorted.sort();
        assert_eq!(Vec::from_iter(sorted), Vec::from_iter(0..10));
    }

    #[test]
    fn sort_reversed() {
        let mut list = List::from_iter((0..10).rev());
        list.sort();
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..10));
    }

    #[test]
    fn sort_permutation() {
        // 37 is coprime with 100, so this visits every residue once.
        let mut list = List::from_iter((0..100).map(|i| (i * 37) % 100));
        list.sort();
        let sorted = Vec::from_iter(list);
        assert!(is_sorted(&sorted));
        assert_eq!(sorted, Vec::from_iter(0..100));
    }

    #[test]
    fn sort_with_duplicates() {
        let mut list = List::from_iter([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        list.sort();
        assert_eq!(
            Vec::from_iter(list),
            vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]
        );
    }

    #[test]
    fn sort_is_stable() {
        // Sort by key only; the id must keep the original order
        // among equal keys.
        let input = vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4), (1, 5)];
        let mut list = List::from_iter(input.clone());
        list.sort_by_key(|pair| pair.0);

        let mut expected = input;
        expected.sort_by_key(|pair| pair.0);
        assert_eq!(Vec::from_iter(list), expected);
    }

    #[test]
    fn sort_by_reversed_comparator() {
        let mut list = List::from_iter([2, 7, 1, 8, 2, 8]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(Vec::from_iter(list), vec![8, 8, 7, 2, 2, 1]);
    }

    #[test]
    fn sort_lengths_around_run_width() {
        // Lengths that are not powers of two exercise the odd final run.
        for len in [2usize, 3, 5, 7, 8, 9, 15, 16, 17, 33] {
            let mut list = List::from_iter((0..len as i32).rev());
            list.sort();
            assert_eq!(Vec::from_iter(list), Vec::from_iter(0..len as i32));
        }
    }
}
