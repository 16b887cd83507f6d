use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `m!`.
///
/// The factors are multiplied pairwise in a balanced product tree, so the
/// large multiplications happen between operands of similar size. With the
/// Karatsuba multiplication of `num-bigint` this costs
/// `O(M(m log m) log m)` where `M(b)` is the cost of multiplying `b`-bit
/// integers.
pub fn factorial(m: usize) -> BigUint {
    range_product(1, m + 1)
}

/// `n! / (n - k)!`, the number of ordered selections of `k` out of `n`.
/// Zero when `k > n`.
pub fn falling_factorial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    range_product(n - k + 1, n + 1)
}

/// Product of the integers in `lo..hi`.
fn range_product(lo: usize, hi: usize) -> BigUint {
    match hi.saturating_sub(lo) {
        0 => BigUint::one(),
        1 => BigUint::from(lo),
        2 => BigUint::from(lo) * BigUint::from(lo + 1),
        len => {
            let mid = lo + len / 2;
            range_product(lo, mid) * range_product(mid, hi)
        }
    }
}
