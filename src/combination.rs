use num_bigint::BigUint;

use crate::binary_search::binary_search;
use crate::binomial_table::BinomialTable;
use crate::error::{Result, check_distinct, check_rank};

/// Ranks `k`-subsets of `[0, n)` with the combinatorial number system.
///
/// The sorted combination `c_0 < c_1 < ... < c_{k-1}` has rank
/// `C(c_0, 1) + C(c_1, 2) + ... + C(c_{k-1}, k)`. The rank does not depend
/// on `n`, which only bounds the elements.
#[derive(Clone, Debug)]
pub struct CombinationCodec {
    binom: BinomialTable,
}

impl CombinationCodec {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        let binom = BinomialTable::build(n, k)?;
        tracing::debug!(n, k, count = %binom.get(n, k), "combination codec");
        Ok(Self { binom })
    }

    pub fn n(&self) -> usize {
        self.binom.n()
    }

    pub fn k(&self) -> usize {
        self.binom.k()
    }

    /// `C(n, k)`, the number of combinations.
    pub fn count(&self) -> &BigUint {
        self.binom.get(self.n(), self.k())
    }

    /// Rank of a combination given as `k` distinct elements in any order.
    pub fn encode(&self, combination: &[usize]) -> Result<BigUint> {
        check_distinct(combination, self.k(), self.n())?;
        let mut sorted = combination.to_vec();
        sorted.sort_unstable();
        Ok(self.encode_sorted(&sorted))
    }

    pub(crate) fn encode_sorted(&self, sorted: &[usize]) -> BigUint {
        sorted
            .iter()
            .enumerate()
            .map(|(i, &c)| self.binom.get(c, i + 1))
            .sum()
    }

    /// The combination with the given rank, in ascending order.
    pub fn decode(&self, rank: &BigUint) -> Result<Vec<usize>> {
        check_rank(rank, self.count())?;
        Ok(self.decode_unchecked(rank.clone()))
    }

    /// Peels off the largest element first: at position `idx` it is the
    /// largest `e` with `C(e, idx + 1) <= rank`.
    pub(crate) fn decode_unchecked(&self, mut rank: BigUint) -> Vec<usize> {
        let (n, k) = (self.n(), self.k());
        let mut combination = Vec::with_capacity(k);
        for idx in (0..k).rev() {
            let e = binary_search(idx, n - k + idx, |mid| {
                rank < *self.binom.get(mid, idx + 1) || rank < *self.binom.get(mid + 1, idx + 1)
            });
            rank -= self.binom.get(e, idx + 1);
            combination.push(e);
        }
        combination.reverse();
        tracing::trace!(?combination, "decoded combination");
        combination
    }
}
