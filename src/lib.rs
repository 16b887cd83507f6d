//! Dense ranking of combinations, permutations and variations over `[0, n)`.
//!
//! Each codec is a bijection between the objects it handles and the integers
//! `[0, count)`. Ranks are arbitrary precision, so `k!` never overflows.

pub mod binary_search;
pub mod binomial_table;
pub mod combination;
pub mod error;
pub mod factorial;
pub mod fenwick;
pub mod permutation;
pub mod reservoir;
pub mod variation;

pub use combination::CombinationCodec;
pub use error::CodecError;
pub use permutation::PermutationCodec;
pub use variation::VariationCodec;

/// Rank of a combinatorial object.
pub type Rank = num_bigint::BigUint;

/// A bijection between some combinatorial objects and `[0, count)`.
pub trait Ranking {
    fn count(&self) -> &Rank;
    fn encode(&self, object: &[usize]) -> error::Result<Rank>;
    fn decode(&self, rank: &Rank) -> error::Result<Vec<usize>>;
}

impl Ranking for CombinationCodec {
    fn count(&self) -> &Rank {
        CombinationCodec::count(self)
    }

    fn encode(&self, object: &[usize]) -> error::Result<Rank> {
        CombinationCodec::encode(self, object)
    }

    fn decode(&self, rank: &Rank) -> error::Result<Vec<usize>> {
        CombinationCodec::decode(self, rank)
    }
}

impl Ranking for PermutationCodec {
    fn count(&self) -> &Rank {
        PermutationCodec::count(self)
    }

    fn encode(&self, object: &[usize]) -> error::Result<Rank> {
        PermutationCodec::encode(self, object)
    }

    fn decode(&self, rank: &Rank) -> error::Result<Vec<usize>> {
        PermutationCodec::decode(self, rank)
    }
}

impl Ranking for VariationCodec {
    fn count(&self) -> &Rank {
        VariationCodec::count(self)
    }

    fn encode(&self, object: &[usize]) -> error::Result<Rank> {
        VariationCodec::encode(self, object)
    }

    fn decode(&self, rank: &Rank) -> error::Result<Vec<usize>> {
        VariationCodec::decode(self, rank)
    }
}
