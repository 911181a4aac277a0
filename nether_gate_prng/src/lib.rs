// Seedable, portable pseudo-random number generator for gateway arrivals.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019), expanding a single `u64`
// seed into the 256-bit state with SplitMix64. No external RNG crate is used
// so that a given seed picks the same arrival cell on every platform.
//
// The only consumer today is the spawn resolver in `nether_gate`, which needs
// one uniform choice among the safe landing cells beside a gateway. Callers
// own their `GameRng` and thread it through by `&mut`; nothing here is global.
//
// **Critical constraint: reproducibility.** Given the same prior state, every
// method must return the same value regardless of platform or optimization
// level. Keep floating point out of the core generator.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ generator state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRng {
    s: [u64; 4],
}

impl GameRng {
    /// Create a generator from a `u64` seed.
    ///
    /// Two generators built from the same seed produce identical sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Next raw `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Uniform integer in `[low, high)`, rejection-sampled to avoid modulo bias.
    ///
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Uniform `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Pick one element of `items` uniformly. `None` for an empty slice.
    ///
    /// A single-element slice returns that element without advancing the
    /// generator.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        match items.len() {
            0 => None,
            1 => items.first(),
            n => items.get(self.range_usize(0, n)),
        }
    }
}

/// SplitMix64 step, used only to expand the seed.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(43);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn range_usize_within_bounds() {
        let mut rng = GameRng::new(555);
        for _ in 0..10_000 {
            let v = rng.range_usize(5, 15);
            assert!((5..15).contains(&v), "range_usize out of range: {v}");
        }
    }

    #[test]
    fn range_u64_power_of_two_span() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_u64(100, 108);
            assert!((100..108).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = GameRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn choose_single_always_that_element() {
        let mut rng = GameRng::new(1);
        for _ in 0..100 {
            assert_eq!(rng.choose(&[17]), Some(&17));
        }
    }

    #[test]
    fn choose_reaches_every_element() {
        let mut rng = GameRng::new(2024);
        let items = [0usize, 1, 2, 3, 4];
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let &v = rng.choose(&items).unwrap();
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s), "some element never chosen: {seen:?}");
    }

    #[test]
    fn serialization_roundtrip_continues_sequence() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }
}
