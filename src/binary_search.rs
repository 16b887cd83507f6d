/// Binary search the half-open range `[lo, hi)` by predicate.
///
/// `go_left(mid)` must be `false` for a (possibly empty) prefix of the range
/// and `true` for the rest. Returns the first index for which it is `true`,
/// or `hi` if there is none. Returns `lo` when `lo >= hi`.
///
/// A predicate that is not monotone gives a deterministic but meaningless
/// index.
pub fn binary_search(
    mut lo: usize,
    mut hi: usize,
    mut go_left: impl FnMut(usize) -> bool,
) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if go_left(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
