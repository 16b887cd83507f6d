use std::fmt;

use itertools::Itertools;
use num_bigint::BigUint;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors reported by the codecs.
///
/// Every codec validates its input before doing any work, so an error never
/// comes with a partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The object size is larger than the universe it is drawn from.
    KExceedsN { n: usize, k: usize },
    /// The input sequence does not have the length the codec was built for.
    LengthMismatch { expected: usize, actual: usize },
    /// An element lies outside of `[0, bound)`.
    ElementOutOfRange { element: usize, bound: usize },
    /// An element appears more than once.
    DuplicateElement { element: usize },
    /// The rank is not smaller than the number of objects.
    RankOutOfRange { rank: BigUint, count: BigUint },
    /// A value had to fit in a machine word but does not.
    Precision { what: &'static str },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::KExceedsN { n, k } => {
                write!(f, "object size k={k} exceeds universe size n={n}")
            }
            CodecError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            CodecError::ElementOutOfRange { element, bound } => {
                write!(f, "element {element} is not in [0, {bound})")
            }
            CodecError::DuplicateElement { element } => {
                write!(f, "element {element} appears more than once")
            }
            CodecError::RankOutOfRange { rank, count } => {
                write!(f, "rank {rank} is not in [0, {count})")
            }
            CodecError::Precision { what } => write!(f, "{what} does not fit in a machine word"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Check that `elements` are `expected` distinct values from `[0, bound)`.
pub(crate) fn check_distinct(elements: &[usize], expected: usize, bound: usize) -> Result<()> {
    if elements.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: elements.len(),
        });
    }
    if let Some(&element) = elements.iter().find(|&&e| e >= bound) {
        return Err(CodecError::ElementOutOfRange { element, bound });
    }
    let sorted: Vec<usize> = elements.iter().copied().sorted_unstable().collect();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(CodecError::DuplicateElement { element: pair[0] });
    }
    Ok(())
}

pub(crate) fn check_rank(rank: &BigUint, count: &BigUint) -> Result<()> {
    if rank >= count {
        return Err(CodecError::RankOutOfRange {
            rank: rank.clone(),
            count: count.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_distinct_elements() {
        assert_eq!(check_distinct(&[3, 0, 2], 3, 4), Ok(()));
        assert_eq!(check_distinct(&[], 0, 0), Ok(()));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            check_distinct(&[0, 1], 3, 4),
            Err(CodecError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn rejects_out_of_range_before_duplicates() {
        assert_eq!(
            check_distinct(&[1, 1, 3], 3, 4),
            Err(CodecError::DuplicateElement { element: 1 })
        );
        assert_eq!(
            check_distinct(&[4, 1, 1], 3, 4),
            Err(CodecError::ElementOutOfRange {
                element: 4,
                bound: 4
            })
        );
    }

    #[test]
    fn rank_must_be_below_count() {
        let count = BigUint::from(6u32);
        assert!(check_rank(&BigUint::from(5u32), &count).is_ok());
        assert!(matches!(
            check_rank(&BigUint::from(6u32), &count),
            Err(CodecError::RankOutOfRange { .. })
        ));
    }

    #[test]
    fn messages() {
        assert_eq!(
            CodecError::KExceedsN { n: 3, k: 4 }.to_string(),
            "object size k=4 exceeds universe size n=3"
        );
        assert_eq!(
            CodecError::RankOutOfRange {
                rank: BigUint::from(10u32),
                count: BigUint::from(10u32),
            }
            .to_string(),
            "rank 10 is not in [0, 10)"
        );
    }
}
