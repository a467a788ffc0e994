//! Deterministic random sources
//!
//! Every stochastic operation in this crate draws through `rand::Rng`, and
//! all draws that matter are unit floats from `rng.gen::<f64>()`.
//! [`SequenceRng`] replays a fixed list of such draws so a test can force
//! each decision of an operator.

use rand::{Error, RngCore};

/// Precision of a `gen::<f64>()` draw in `rand` 0.8
const FLOAT_BITS: u32 = 53;

/// Replays a cyclic sequence of unit draws
///
/// `rng.gen::<f64>()` on this source returns the scripted values in order,
/// wrapping around when the sequence is exhausted. Values that are not
/// multiples of 2^-53 round up to the next representable draw, so a
/// scripted draw never lands below a threshold it was meant to meet.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Create a source from unit draws in `[0, 1)`
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "Draw sequence cannot be empty");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "Draws must be in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// A source that always yields the same draw
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    // `Standard` builds an f64 from the top 53 bits of one u64
    fn next_u64(&mut self) -> u64 {
        let scale = (1u64 << FLOAT_BITS) as f64;
        let mantissa = ((self.next_draw() * scale).ceil() as u64).min((1u64 << FLOAT_BITS) - 1);
        mantissa << (64 - FLOAT_BITS)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sequence_replays_draws() {
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 0.75]);
        assert_eq!(rng.gen::<f64>(), 0.0);
        assert_eq!(rng.gen::<f64>(), 0.5);
        assert_eq!(rng.gen::<f64>(), 0.75);
        assert_eq!(rng.gen::<f64>(), 0.0);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_sequence_small_draws() {
        let mut rng = SequenceRng::constant(0.0005);
        let draw: f64 = rng.gen();
        assert!((draw - 0.0005).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "Draws must be in [0, 1)")]
    fn test_sequence_rejects_one() {
        SequenceRng::new(vec![1.0]);
    }
}
