use goosino_types::casino::WHEEL_MAX_NUMBER;
use rand::distributions::{WeightedError, WeightedIndex};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// The one random stream of a simulation run.
///
/// Seeded runs are reproducible; unseeded runs draw their seed from the OS. Every draw the
/// simulation makes goes through this type, so helpers here fix how many values each kind of
/// decision consumes.
#[derive(Clone, Debug)]
pub struct CasinoRng {
    inner: ChaCha20Rng,
}

impl CasinoRng {
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { inner }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Uniform float in `[0.0, 1.0)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Bernoulli trial with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform index in `[0, len)`, `None` when there is nothing to pick from.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Uniform integer in `[low, high]`. Collapses to `low` without drawing when the range is
    /// empty or a single value.
    pub fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Roulette-wheel selection over unnormalized weights.
    pub fn weighted(&mut self, weights: &[f64]) -> Result<usize, WeightedError> {
        let dist = WeightedIndex::new(weights)?;
        Ok(self.inner.sample(&dist))
    }

    /// Spin a European wheel (0-36).
    pub fn spin_roulette(&mut self) -> u8 {
        self.inner.gen_range(0..=WHEEL_MAX_NUMBER)
    }
}

impl RngCore for CasinoRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casino_rng_deterministic() {
        let mut rng1 = CasinoRng::seeded(42);
        let mut rng2 = CasinoRng::seeded(42);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_casino_rng_different_seeds() {
        let mut rng1 = CasinoRng::seeded(1);
        let mut rng2 = CasinoRng::seeded(2);
        let seq1: Vec<u64> = (0..10).map(|_| rng1.next_u64()).collect();
        let seq2: Vec<u64> = (0..10).map(|_| rng2.next_u64()).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_casino_rng_roulette() {
        let mut rng = CasinoRng::seeded(3);
        for _ in 0..1000 {
            assert!(rng.spin_roulette() <= 36);
        }
    }

    #[test]
    fn test_pick_empty_is_none() {
        let mut rng = CasinoRng::seeded(4);
        assert_eq!(rng.pick(0), None);
        for _ in 0..100 {
            assert!(rng.pick(3).unwrap() < 3);
        }
    }

    #[test]
    fn test_range_inclusive_degenerate() {
        let mut rng = CasinoRng::seeded(5);
        assert_eq!(rng.range_inclusive(7, 7), 7);
        assert_eq!(rng.range_inclusive(9, 2), 9);
        for _ in 0..200 {
            let value = rng.range_inclusive(26, 100);
            assert!((26..=100).contains(&value));
        }
    }

    #[test]
    fn test_weighted_skips_zero_weights() {
        let mut rng = CasinoRng::seeded(6);
        for _ in 0..200 {
            assert_eq!(rng.weighted(&[0.0, 0.0, 2.5, 0.0]).unwrap(), 2);
        }
    }

    #[test]
    fn test_weighted_all_zero_fails() {
        let mut rng = CasinoRng::seeded(7);
        assert_eq!(
            rng.weighted(&[0.0, 0.0]).unwrap_err(),
            WeightedError::AllWeightsZero
        );
    }
}
