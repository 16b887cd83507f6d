use rand::Rng;

/// Draw a uniform sample of `size` items from `stream` in one pass.
///
/// Algorithm R: the `i`-th item (counting from one) replaces a random slot
/// of the reservoir with probability `size / i`. Streams with at most `size`
/// items are returned whole and in order.
pub fn sample<T, R: Rng + ?Sized>(
    stream: impl IntoIterator<Item = T>,
    size: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut reservoir = Vec::with_capacity(size);
    for (seen, item) in stream.into_iter().enumerate() {
        if reservoir.len() < size {
            reservoir.push(item);
        } else {
            let slot = rng.gen_range(0..=seen);
            if slot < size {
                reservoir[slot] = item;
            }
        }
    }
    reservoir
}
