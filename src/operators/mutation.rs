//! Mutation operators
//!
//! This module provides per-bit flip mutation for chromosomes.

use rand::Rng;

use crate::genome::chromosome::Chromosome;
use crate::operators::traits::MutationOperator;

/// Per-bit flip probability
pub const MUTATION_RATE: f64 = 0.001;

/// Bit-flip mutation
///
/// Draws once per bit and flips the bit when the draw is below
/// [`MUTATION_RATE`].
#[derive(Clone, Debug, Default)]
pub struct BitFlipMutation;

impl BitFlipMutation {
    /// Create a new bit-flip mutation
    pub fn new() -> Self {
        Self
    }

    /// Return a mutated copy, leaving the original untouched
    pub fn mutated<R: Rng>(&self, genome: &Chromosome, rng: &mut R) -> Chromosome {
        let mut child = genome.clone();
        self.mutate(&mut child, rng);
        child
    }
}

impl MutationOperator for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: &mut Chromosome, rng: &mut R) {
        for i in 0..genome.len() {
            if rng.gen::<f64>() < MUTATION_RATE {
                genome.flip(i);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        MUTATION_RATE
    }
}
