//! Fitness traits
//!
//! This module defines the fitness evaluation trait.

use crate::genome::chromosome::Chromosome;

/// Fitness evaluation trait
///
/// Higher is better. Values are non-negative and may be `f64::INFINITY`
/// for a perfect solution.
pub trait Fitness {
    /// Evaluate the fitness of a chromosome
    fn evaluate(&self, chromosome: &Chromosome) -> f64;
}

/// A simple function wrapper for fitness evaluation
pub struct FnFitness<F>
where
    F: Fn(&Chromosome) -> f64,
{
    f: F,
}

impl<F> FnFitness<F>
where
    F: Fn(&Chromosome) -> f64,
{
    /// Create a new function-based fitness evaluator
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Fitness for FnFitness<F>
where
    F: Fn(&Chromosome) -> f64,
{
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        (self.f)(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_fitness() {
        let fitness = FnFitness::new(|c: &Chromosome| c.len() as f64);
        assert_eq!(fitness.evaluate(&Chromosome::zeros(12)), 12.0);
    }
}
