use std::iter::FusedIterator;

/// Iterator over the orderings of a slice.
///
/// Orderings come out in lexicographic order of their index sequences, which
/// is the order obtained by fixing each element first in turn and permuting
/// the remainder.
///
/// Created by [`Combinatorics::permutations`](super::Combinatorics::permutations).
#[derive(Debug)]
pub struct Permutations<'a, T> {
    elements: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T> Permutations<'a, T> {
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            indices: (0..elements.len()).collect(),
            started: false,
            done: elements.is_empty(),
        }
    }

    /// Steps `indices` to the next lexicographic permutation.
    ///
    /// Returns `false` when `indices` is already the last (descending) one.
    fn advance(&mut self) -> bool {
        let idx = &mut self.indices;
        let Some(pivot) = (0..idx.len().saturating_sub(1))
            .rev()
            .find(|&i| idx[i] < idx[i + 1])
        else {
            return false;
        };
        let Some(successor) = (pivot + 1..idx.len()).rev().find(|&j| idx[j] > idx[pivot]) else {
            return false;
        };
        idx.swap(pivot, successor);
        idx[pivot + 1..].reverse();
        true
    }
}

impl<T> Clone for Permutations<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            indices: self.indices.clone(),
            started: self.started,
            done: self.done,
        }
    }
}

impl<'a, T> Iterator for Permutations<'a, T> {
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

impl<T> FusedIterator for Permutations<'_, T> {}
