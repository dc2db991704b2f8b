use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness for the strategies that need one.
pub trait RandomGenerator {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    fn get_random_from_slice<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Thread-local, OS-seeded randomness.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible randomness from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};

    #[test]
    fn same_seed_gives_same_indices() {
        let mut first = SeededRandomGenerator::new(42);
        let mut second = SeededRandomGenerator::new(42);

        let a: Vec<usize> = (0..20).map(|_| first.next_index(10)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.next_index(10)).collect();

        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 10));
    }

    #[test]
    fn random_from_slice_stays_in_bounds() {
        let items = [432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut srg = StandardRandomGenerator;

        for _ in 0..100 {
            let picked = srg.get_random_from_slice(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn random_from_empty_slice_is_none() {
        let mut crg = SeededRandomGenerator::default();

        assert_eq!(crg.get_random_from_slice::<u8>(&[]), None);
    }
}
