use rand::rngs::OsRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Generates demo key sets.
///
/// Uses the xoshiro256** PRNG so a seed reproduces the same keys.
///
/// # Examples
///
/// ```
/// use avl_visualizer::fuzzer::KeyFuzzer;
///
/// let mut a = KeyFuzzer::new(Some(7));
/// let mut b = KeyFuzzer::new(Some(7));
/// assert_eq!(a.distinct_keys(5, 0, 99), b.distinct_keys(5, 0, 99));
/// ```
pub struct KeyFuzzer {
    /// The seed the PRNG was initialized with.
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl KeyFuzzer {
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// A key in `[min, max]` (inclusive).
    pub fn random_key(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Up to `count` distinct keys from `[min, max]`, in random order.
    ///
    /// Returns fewer keys when the range holds fewer than `count` values.
    pub fn distinct_keys(&mut self, count: usize, min: i32, max: i32) -> Vec<i32> {
        if min > max {
            return Vec::new();
        }
        let span = (max as i64 - min as i64 + 1) as usize;
        index::sample(&mut self.rng, span, count.min(span))
            .into_iter()
            .map(|offset| (min as i64 + offset as i64) as i32)
            .collect()
    }

    /// `1..=n` in random order.
    pub fn shuffled_range(&mut self, n: i32) -> Vec<i32> {
        let mut keys: Vec<i32> = (1..=n).collect();
        keys.shuffle(&mut self.rng);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_key_in_range() {
        let mut fuzzer = KeyFuzzer::new(None);
        for _ in 0..100 {
            let k = fuzzer.random_key(-5, 5);
            assert!((-5..=5).contains(&k));
        }
    }

    #[test]
    fn distinct_keys_are_distinct() {
        let mut fuzzer = KeyFuzzer::new(Some(42));
        let mut keys = fuzzer.distinct_keys(50, -30, 30);
        assert_eq!(keys.len(), 50);
        assert!(keys.iter().all(|k| (-30..=30).contains(k)));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 50);
    }

    #[test]
    fn distinct_keys_clamps_to_range() {
        let mut fuzzer = KeyFuzzer::new(Some(1));
        let mut keys = fuzzer.distinct_keys(10, 3, 5);
        keys.sort_unstable();
        assert_eq!(keys, vec![3, 4, 5]);
        assert!(fuzzer.distinct_keys(3, 5, 3).is_empty());
    }

    #[test]
    fn full_i32_range() {
        let mut fuzzer = KeyFuzzer::new(Some(9));
        assert_eq!(fuzzer.distinct_keys(4, i32::MIN, i32::MAX).len(), 4);
    }

    #[test]
    fn shuffled_range_is_permutation() {
        let mut fuzzer = KeyFuzzer::new(Some(3));
        let mut keys = fuzzer.shuffled_range(20);
        keys.sort_unstable();
        assert_eq!(keys, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn reproducible() {
        let mut a = KeyFuzzer::new(Some(1234));
        let mut b = KeyFuzzer::new(Some(a.seed));
        for _ in 0..10 {
            assert_eq!(a.random_key(0, 1000), b.random_key(0, 1000));
        }
    }
}
