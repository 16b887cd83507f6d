use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::binary_search::binary_search;
use crate::error::{CodecError, Result, check_distinct, check_rank};
use crate::factorial::factorial;
use crate::fenwick::Fenwick;

/// Ranks permutations of `[0, k)` through their Lehmer codes.
///
/// The Lehmer code is read as a number in the factorial number system, most
/// significant digit first, so ranks follow the lexicographic order of the
/// permutations.
#[derive(Clone, Debug)]
pub struct PermutationCodec {
    k: usize,
    count: BigUint,
}

impl PermutationCodec {
    pub fn new(k: usize) -> Self {
        let count = factorial(k);
        tracing::debug!(k, %count, "permutation codec");
        Self { k, count }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// `k!`, the number of permutations.
    pub fn count(&self) -> &BigUint {
        &self.count
    }

    pub fn encode(&self, permutation: &[usize]) -> Result<BigUint> {
        check_distinct(permutation, self.k, self.k)?;
        Ok(lehmer_value(&lehmer_code(permutation)))
    }

    pub fn decode(&self, rank: &BigUint) -> Result<Vec<usize>> {
        check_rank(rank, &self.count)?;
        let lehmer = lehmer_digits(rank.clone(), self.k)?;
        Ok(permutation_from_lehmer(&lehmer))
    }
}

/// Lehmer code of a permutation of `[0, len)`.
///
/// Digit `i` is the number of values smaller than `permutation[i]` that do
/// not appear before position `i`.
pub fn lehmer_from_permutation(permutation: &[usize]) -> Result<Vec<usize>> {
    check_distinct(permutation, permutation.len(), permutation.len())?;
    Ok(lehmer_code(permutation))
}

fn lehmer_code(permutation: &[usize]) -> Vec<usize> {
    let mut placed = Fenwick::new(permutation.len());
    permutation
        .iter()
        .map(|&e| {
            // `e` itself is not placed yet, so this counts earlier values below `e`.
            let smaller_placed = placed.prefix_sum(e) as usize;
            placed.add(e, 1);
            e - smaller_placed
        })
        .collect()
}

/// Value of a Lehmer code in the factorial number system.
///
/// The last digit has place value `0!` and is always zero, the one before
/// it `1!`, and so on. Digit `i` of a code of length `len` must be below
/// `len - i`.
pub fn rank_from_lehmer(lehmer: &[usize]) -> Result<BigUint> {
    let len = lehmer.len();
    if let Some((i, &digit)) = lehmer
        .iter()
        .enumerate()
        .find(|&(i, &digit)| digit >= len - i)
    {
        return Err(CodecError::ElementOutOfRange {
            element: digit,
            bound: len - i,
        });
    }
    Ok(lehmer_value(lehmer))
}

fn lehmer_value(lehmer: &[usize]) -> BigUint {
    let mut place = BigUint::from(1u32);
    let mut rank = BigUint::zero();
    for (i, &digit) in lehmer.iter().rev().enumerate().skip(1) {
        place *= i;
        rank += &place * digit;
    }
    rank
}

/// Lehmer code of the permutation of `[0, k)` with the given rank.
pub fn lehmer_from_rank(rank: &BigUint, k: usize) -> Result<Vec<usize>> {
    check_rank(rank, &factorial(k))?;
    lehmer_digits(rank.clone(), k)
}

fn lehmer_digits(mut rank: BigUint, k: usize) -> Result<Vec<usize>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let mut lehmer = Vec::with_capacity(k);
    let mut place = factorial(k - 1);
    for i in (1..k).rev() {
        let digit = &rank / &place;
        rank %= &place;
        place /= i;
        lehmer.push(digit.to_usize().ok_or(CodecError::Precision {
            what: "Lehmer digit",
        })?);
    }
    lehmer.push(0);
    Ok(lehmer)
}

/// Inverse of [`lehmer_from_permutation`] for a well-formed Lehmer code.
///
/// Keeps a counter per value that is one while the value is unused. The
/// value for digit `d` is the first index whose prefix sum reaches `d + 1`.
fn permutation_from_lehmer(lehmer: &[usize]) -> Vec<usize> {
    let len = lehmer.len();
    let mut available = Fenwick::from_values(&vec![1; len]);
    lehmer
        .iter()
        .map(|&digit| {
            let wanted = digit as i64 + 1;
            let value = binary_search(0, len, |mid| available.prefix_sum(mid) >= wanted);
            available.add(value, -1);
            value
        })
        .collect()
}
