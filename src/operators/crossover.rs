//! Crossover operators
//!
//! This module provides single-point crossover for chromosomes.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::chromosome::Chromosome;
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover for chromosomes
///
/// One unit draw `u` picks the split point `round(u * (len - 1))`, which
/// weights both endpoints half as much as the interior points. Child one is
/// the head of parent one joined to the tail of parent two; child two is the
/// reverse.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Split point for a unit draw on chromosomes of `length` bits
    pub fn split_point(length: usize, u: f64) -> usize {
        if length == 0 {
            return 0;
        }
        (u * (length - 1) as f64).round() as usize
    }

    /// Exchange the tails of two parents at `point`
    pub fn recombine(
        parent1: &Chromosome,
        parent2: &Chromosome,
        point: usize,
    ) -> OperatorResult<(Chromosome, Chromosome)> {
        let children = parent1
            .splice(parent2, point)
            .and_then(|child1| parent2.splice(parent1, point).map(|child2| (child1, child2)));

        match children {
            Ok(pair) => OperatorResult::Success(pair),
            Err(e) => OperatorResult::Failed(OperatorError::CrossoverFailed(e.to_string())),
        }
    }
}

impl CrossoverOperator for OnePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> OperatorResult<(Chromosome, Chromosome)> {
        if parent1.len() != parent2.len() {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(
                "Parent dimensions do not match".to_string(),
            ));
        }

        let point = Self::split_point(parent1.len(), rng.gen());
        Self::recombine(parent1, parent2, point)
    }
}
