// Fenwick (binary indexed) trees over `i64` counters, 0-indexed.
//
// Slot `i` holds the sum of the elements in `(i & (i + 1))..=i`. Updates walk
// upwards with `i |= i + 1`, queries walk downwards by clearing the lowest set
// bit of `i + 1`.

/// Point-update, prefix-sum Fenwick tree.
#[derive(Clone, Debug)]
pub struct Fenwick {
    tree: Vec<i64>,
}

impl Fenwick {
    /// A tree of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self { tree: vec![0; len] }
    }

    /// Build a tree holding `values`, one point update per element.
    pub fn from_values(values: &[i64]) -> Self {
        let mut fenwick = Self::new(values.len());
        for (idx, &value) in values.iter().enumerate() {
            fenwick.add(idx, value);
        }
        fenwick
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Add `delta` to the element at `idx`.
    pub fn add(&mut self, idx: usize, delta: i64) {
        debug_assert!(idx < self.len());
        let mut i = idx;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i |= i + 1;
        }
    }

    /// Sum of the elements at indices `0..=idx`.
    pub fn prefix_sum(&self, idx: usize) -> i64 {
        debug_assert!(idx < self.len());
        let mut sum = 0;
        let mut i = idx + 1;
        while i > 0 {
            sum += self.tree[i - 1];
            i &= i - 1;
        }
        sum
    }
}

/// Fenwick tree that also supports adding a value to a whole range.
///
/// The prefix sum up to `x` is `offset(x) + slope(x) * x`, where both parts
/// are ordinary Fenwick prefix sums.
#[derive(Clone, Debug)]
pub struct RangeFenwick {
    slope: Fenwick,
    offset: Fenwick,
}

impl RangeFenwick {
    pub fn new(len: usize) -> Self {
        Self {
            slope: Fenwick::new(len),
            offset: Fenwick::new(len),
        }
    }

    pub fn from_values(values: &[i64]) -> Self {
        let mut fenwick = Self::new(values.len());
        for (idx, &value) in values.iter().enumerate() {
            fenwick.add(idx, value);
        }
        fenwick
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn add(&mut self, idx: usize, delta: i64) {
        self.add_to_range(idx, idx, delta);
    }

    /// Add `delta` to every element at indices `left..=right`.
    pub fn add_to_range(&mut self, left: usize, right: usize, delta: i64) {
        debug_assert!(left <= right && right < self.len());
        let (left_i, right_i) = (left as i64, right as i64);
        self.slope.add(left, delta);
        self.offset.add(left, -(left_i - 1) * delta);
        self.slope.add(right, -delta);
        self.offset.add(right, right_i * delta);
    }

    pub fn prefix_sum(&self, idx: usize) -> i64 {
        self.offset.prefix_sum(idx) + self.slope.prefix_sum(idx) * idx as i64
    }
}
