use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng, SeedableRng as _};

/// Source of the only randomness in seating generation: a uniformly random
/// permutation of a slice.
pub trait RandomSource {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Adapts any `rand` generator. The permutation is a Fisher-Yates shuffle.
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}

impl RngSource<StdRng> {
    /// Reproducible source, same seed gives the same arrangement.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource as _, RngSource};

    #[test]
    fn shuffle_is_a_permutation() {
        let mut source = RngSource::seeded(7);
        let mut items: Vec<u32> = (0..50).collect();
        source.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut left: Vec<u32> = (0..20).collect();
        let mut right = left.clone();
        RngSource::seeded(42).shuffle(&mut left);
        RngSource::seeded(42).shuffle(&mut right);
        assert_eq!(left, right);
    }
}
