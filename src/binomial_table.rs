use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{CodecError, Result};

/// Binomial coefficients `C(m, i)` for `0 <= m <= n` and `0 <= i <= k`.
///
/// Built with Pascal's rule in `O(n * k)` additions of integers that are
/// `O(n)` bits long. Entries with `i > m` are zero.
#[derive(Clone, Debug)]
pub struct BinomialTable {
    n: usize,
    k: usize,
    rows: Vec<Vec<BigUint>>,
}

impl BinomialTable {
    pub fn build(n: usize, k: usize) -> Result<Self> {
        if k > n {
            return Err(CodecError::KExceedsN { n, k });
        }

        let mut rows = vec![vec![BigUint::zero(); k + 1]; n + 1];
        rows[0][0] = BigUint::one();
        for m in 1..=n {
            rows[m][0] = BigUint::one();
            for i in 1..=m.min(k) {
                rows[m][i] = &rows[m - 1][i - 1] + &rows[m - 1][i];
            }
        }

        tracing::debug!(n, k, "built binomial table");
        Ok(Self { n, k, rows })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// `C(m, i)`. Panics unless `m <= n` and `i <= k`.
    pub fn get(&self, m: usize, i: usize) -> &BigUint {
        &self.rows[m][i]
    }

    /// `[C(m, 0), ..., C(m, k)]`.
    pub fn row(&self, m: usize) -> &[BigUint] {
        &self.rows[m]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn render(table: &BinomialTable) -> String {
        (0..=table.n())
            .map(|m| {
                table
                    .row(m)
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn table_for_ten_choose_three() {
        let table = BinomialTable::build(10, 3).unwrap();
        assert_snapshot!(render(&table), @r"
        1 0 0 0
        1 1 0 0
        1 2 1 0
        1 3 3 1
        1 4 6 4
        1 5 10 10
        1 6 15 20
        1 7 21 35
        1 8 28 56
        1 9 36 84
        1 10 45 120
        ");
    }

    #[test]
    fn single_rows() {
        let table = BinomialTable::build(10, 3).unwrap();
        let expected: Vec<BigUint> = [1u32, 5, 10, 10].into_iter().map(BigUint::from).collect();
        assert_eq!(table.row(5), expected.as_slice());
        let expected: Vec<BigUint> = [1u32, 10, 45, 120].into_iter().map(BigUint::from).collect();
        assert_eq!(table.row(10), expected.as_slice());
    }

    #[test]
    fn empty_universe() {
        let table = BinomialTable::build(0, 0).unwrap();
        assert_eq!(table.get(0, 0), &BigUint::one());
    }

    #[test]
    fn rejects_k_larger_than_n() {
        assert_eq!(
            BinomialTable::build(3, 4).unwrap_err(),
            CodecError::KExceedsN { n: 3, k: 4 }
        );
    }

    #[test]
    fn entries_exceed_u64() {
        let table = BinomialTable::build(100, 50).unwrap();
        assert_eq!(
            table.get(100, 50).to_string(),
            "100891344545564193334812497256"
        );
    }
}
