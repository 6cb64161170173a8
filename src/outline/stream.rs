//! Seeded pseudo-random stream
//!
//! A polynomial rolling hash folds the seed text into a 32-bit signed
//! accumulator; each draw takes the fractional part of `sin(state) * 10000`
//! and bumps the state by one. All accumulator arithmetic wraps in
//! two's-complement - the wraparound is load-bearing, long seeds rely on it.
//!
//! Draw order is the sole source of variation: two streams built from the
//! same seed text produce the identical sequence.

/// Hash seed text into the initial stream state.
///
/// Operates on UTF-16 code units, so non-ASCII seeds are well defined.
/// The empty string hashes to 0, which is a valid stream state.
pub fn seed_hash(seed: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(code as i32);
    }
    hash
}

/// Deterministic pseudo-random stream derived from a text seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: i32,
}

impl SeededStream {
    /// Build a stream from seed text
    pub fn new(seed: &str) -> Self {
        Self {
            state: seed_hash(seed),
        }
    }

    /// Draw the next value in [0, 1) and advance the state
    pub fn draw(&mut self) -> f64 {
        let x = (self.state as f64).sin() * 10000.0;
        self.state = self.state.wrapping_add(1);
        x - x.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hashes() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("walnut"), -795189909);
        assert_eq!(seed_hash("walnut2"), 1118916647);
        assert_eq!(seed_hash("walnut_pearl"), -581865358);
    }

    #[test]
    fn test_hash_wraps_on_long_seed() {
        // 60 chars overflow i32 range several times during accumulation
        let seed = "a".repeat(60);
        assert_eq!(seed_hash(&seed), 1954304960);
    }

    #[test]
    fn test_empty_seed_draw_sequence() {
        // state 0: fractional parts of sin(0) * 10000, sin(1) * 10000, ...
        let mut stream = SeededStream::new("");
        assert_eq!(stream.draw(), 0.0);
        assert!((stream.draw() - 0.7098480789645691).abs() < 1e-12);
        assert!((stream.draw() - 0.9742682568175951).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededStream::new("walnut");
        let mut b = SeededStream::new("walnut");
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_draws_stay_in_unit_interval() {
        for seed in ["", "walnut", "walnut2", "🌰", &"z".repeat(80)] {
            let mut stream = SeededStream::new(seed);
            for _ in 0..1000 {
                let v = stream.draw();
                assert!((0.0..1.0).contains(&v), "draw {v} out of range for {seed:?}");
            }
        }
    }

    #[test]
    fn test_interleaved_streams_do_not_perturb_each_other() {
        let mut solo = SeededStream::new("walnut");
        let expected: Vec<f64> = (0..16).map(|_| solo.draw()).collect();

        let mut a = SeededStream::new("walnut");
        let mut other = SeededStream::new("pecan");
        let mut interleaved = Vec::new();
        for _ in 0..16 {
            interleaved.push(a.draw());
            other.draw();
        }
        assert_eq!(expected, interleaved);
    }
}
