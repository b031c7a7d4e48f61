//! Lazy combination and permutation enumeration over slices.
//!
//! Both iterators borrow their input, never reorder or mutate it, and can be
//! restarted by cloning a fresh iterator or by asking the slice again.

mod combinations;
mod permutations;

pub use combinations::Combinations;
pub use permutations::Permutations;

/// Combinatorial enumeration over a slice.
pub trait Combinatorics<T> {
    /// Every subset of exactly `size` elements, in lexicographic index order.
    ///
    /// Elements keep their relative input order inside each combination.
    /// `size == 0` yields one empty combination; `size > len` yields none.
    ///
    /// ```
    /// use quadfind::combinatorics::Combinatorics;
    ///
    /// let digits = [0u8, 1, 2];
    /// let pairs: Vec<Vec<&u8>> = digits.combinations(2).collect();
    /// assert_eq!(pairs, vec![vec![&0, &1], vec![&0, &2], vec![&1, &2]]);
    /// ```
    fn combinations(&self, size: usize) -> Combinations<'_, T>;

    /// Every ordering of all elements, each exactly once.
    ///
    /// Element `i` is placed first, followed by every ordering of the rest,
    /// for `i` in input order. An empty slice has no permutations.
    ///
    /// ```
    /// use quadfind::combinatorics::Combinatorics;
    ///
    /// let digits = [0u8, 1, 2];
    /// let orders: Vec<Vec<&u8>> = digits.permutations().collect();
    /// assert_eq!(orders[1], vec![&0, &2, &1]);
    /// assert_eq!(orders[2], vec![&1, &0, &2]);
    /// ```
    fn permutations(&self) -> Permutations<'_, T>;
}

impl<T> Combinatorics<T> for [T] {
    fn combinations(&self, size: usize) -> Combinations<'_, T> {
        Combinations::new(self, size)
    }

    fn permutations(&self) -> Permutations<'_, T> {
        Permutations::new(self)
    }
}

/// Number of `k`-combinations of `n` elements, or `None` on overflow.
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        let numerator = u64::try_from(n - i).ok()?;
        let denominator = u64::try_from(i + 1).ok()?;
        // Exact at every step: the running product is C(n, i + 1) * denominator.
        result = result.checked_mul(numerator)? / denominator;
    }
    Some(result)
}

/// `n!`, or `None` on overflow.
#[must_use]
pub fn factorial(n: usize) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(u64::try_from(i).ok()?))
}
