use std::iter::FusedIterator;

/// Iterator over the `size`-combinations of a slice.
///
/// Created by [`Combinatorics::combinations`](super::Combinatorics::combinations).
#[derive(Debug)]
pub struct Combinations<'a, T> {
    elements: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub(super) fn new(elements: &'a [T], size: usize) -> Self {
        Self {
            elements,
            indices: (0..size).collect(),
            started: false,
            done: size > elements.len(),
        }
    }

    /// Moves `indices` to the next strictly increasing index sequence.
    ///
    /// Returns `false` once the last sequence has been produced.
    fn advance(&mut self) -> bool {
        let n = self.elements.len();
        let k = self.indices.len();
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[pivot] += 1;
        for j in pivot + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T> Clone for Combinations<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            indices: self.indices.clone(),
            started: self.started,
            done: self.done,
        }
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| &self.elements[i]).collect())
    }
}

impl<T> FusedIterator for Combinations<'_, T> {}

#[cfg(test)]
mod tests {
    use super::super::Combinatorics;

    fn collect(input: &[u32], size: usize) -> Vec<Vec<u32>> {
        input
            .combinations(size)
            .map(|c| c.into_iter().copied().collect())
            .collect()
    }

    #[test]
    fn pairs_of_four_in_lexicographic_order() {
        assert_eq!(
            collect(&[0, 1, 2, 3], 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn size_zero_yields_single_empty_combination() {
        assert_eq!(collect(&[7, 8], 0), vec![Vec::<u32>::new()]);
        assert_eq!(collect(&[], 0), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn size_equal_to_len_yields_input() {
        assert_eq!(collect(&[5, 3, 9], 3), vec![vec![5, 3, 9]]);
    }

    #[test]
    fn size_larger_than_len_yields_nothing() {
        assert!(collect(&[1, 2, 3], 4).is_empty());
    }

    #[test]
    fn preserves_input_order_within_combination() {
        assert_eq!(collect(&[9, 1, 5], 2), vec![vec![9, 1], vec![9, 5], vec![1, 5]]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let input = [1, 2];
        let mut iter = input.combinations(2);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn clone_restarts_from_the_same_position() {
        let input = [1, 2, 3, 4];
        let fresh = input.combinations(3);
        let mut consumed = fresh.clone();
        consumed.next();
        assert_eq!(fresh.count(), 4);
        assert_eq!(consumed.count(), 3);
        assert_eq!(input.combinations(3).count(), 4);
    }

    #[test]
    fn elements_need_no_trait_bounds() {
        struct Opaque;
        let input = [Opaque, Opaque, Opaque];
        assert_eq!(input.combinations(2).count(), 3);
    }
}
