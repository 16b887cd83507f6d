use std::collections::HashMap;

use num_bigint::BigUint;

use crate::combination::CombinationCodec;
use crate::error::{Result, check_distinct, check_rank};
use crate::permutation::PermutationCodec;

/// Ranks ordered selections of `k` distinct elements of `[0, n)`.
///
/// A variation splits into the set of its elements and the order in which
/// they appear. The rank is `combination_rank * k! + permutation_rank`, so
/// all orderings of one set occupy a contiguous block of `k!` ranks.
#[derive(Clone, Debug)]
pub struct VariationCodec {
    combinations: CombinationCodec,
    permutations: PermutationCodec,
    count: BigUint,
}

impl VariationCodec {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        let combinations = CombinationCodec::new(n, k)?;
        let permutations = PermutationCodec::new(k);
        let count = combinations.count() * permutations.count();
        tracing::debug!(n, k, %count, "variation codec");
        Ok(Self {
            combinations,
            permutations,
            count,
        })
    }

    pub fn n(&self) -> usize {
        self.combinations.n()
    }

    pub fn k(&self) -> usize {
        self.combinations.k()
    }

    /// `n! / (n - k)!`, the number of variations.
    pub fn count(&self) -> &BigUint {
        &self.count
    }

    pub fn encode(&self, variation: &[usize]) -> Result<BigUint> {
        check_distinct(variation, self.k(), self.n())?;

        let mut combination = variation.to_vec();
        combination.sort_unstable();
        let position: HashMap<usize, usize> = combination
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();
        // E.g. [8, 3, 9, 6] becomes [2, 0, 3, 1].
        let relative: Vec<usize> = variation.iter().map(|e| position[e]).collect();

        let combination_rank = self.combinations.encode_sorted(&combination);
        let permutation_rank = self.permutations.encode(&relative)?;
        Ok(combination_rank * self.permutations.count() + permutation_rank)
    }

    pub fn decode(&self, rank: &BigUint) -> Result<Vec<usize>> {
        check_rank(rank, &self.count)?;
        let block = self.permutations.count();
        let combination = self.combinations.decode_unchecked(rank / block);
        let order = self.permutations.decode(&(rank % block))?;
        Ok(order.into_iter().map(|i| combination[i]).collect())
    }
}
