//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a chromosome with its
//! fitness and its share of the roulette wheel.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::expression::codec::decode;
use crate::expression::evaluator::evaluate;
use crate::fitness::traits::Fitness;
use crate::genome::chromosome::Chromosome;

/// An individual in the population
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Individual {
    /// The chromosome of this individual
    pub genome: Chromosome,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
    /// Fitness divided by the total population fitness
    pub selection_chance: f64,
    /// Cumulative selection chance up to and including this individual
    pub roulette_chance: f64,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new individual with an unevaluated chromosome
    pub fn new(genome: Chromosome) -> Self {
        Self::with_generation(genome, 0)
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(genome: Chromosome, fitness: f64) -> Self {
        Self {
            fitness: Some(fitness),
            ..Self::new(genome)
        }
    }

    /// Create a new individual with birth generation
    pub fn with_generation(genome: Chromosome, generation: usize) -> Self {
        Self {
            genome,
            fitness: None,
            selection_chance: 0.0,
            roulette_chance: 0.0,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Evaluate the chromosome with the given fitness function
    pub fn evaluate<Fit: Fitness + ?Sized>(&mut self, fitness: &Fit) {
        self.fitness = Some(fitness.evaluate(&self.genome));
    }

    /// Fitness, treating an unevaluated individual as zero
    pub fn fitness_or_zero(&self) -> f64 {
        self.fitness.unwrap_or(0.0)
    }

    /// Check if this individual decodes exactly to the target
    pub fn is_exact(&self) -> bool {
        self.fitness == Some(f64::INFINITY)
    }

    /// Get a reference to the chromosome
    pub fn genome(&self) -> &Chromosome {
        &self.genome
    }

    /// Take the chromosome out of this individual
    pub fn into_genome(self) -> Chromosome {
        self.genome
    }

    /// The decoded expression
    pub fn expression(&self) -> String {
        decode(&self.genome)
    }

    /// The value of the decoded expression
    pub fn value(&self) -> f64 {
        evaluate(&self.expression())
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 > f2,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome && self.fitness == other.fitness
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1.partial_cmp(&f2),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::codec::encode;
    use crate::fitness::target::TargetDistance;

    #[test]
    fn test_individual_new() {
        let individual = Individual::new(Chromosome::zeros(8));
        assert!(!individual.is_evaluated());
        assert_eq!(individual.birth_generation, 0);
        assert_eq!(individual.fitness_or_zero(), 0.0);
    }

    #[test]
    fn test_individual_evaluate() {
        let mut individual = Individual::new(encode("2*3").unwrap());
        individual.evaluate(&TargetDistance::new(8.0));
        assert_eq!(individual.fitness, Some(0.5));
        assert_eq!(individual.expression(), "2*3");
        assert_eq!(individual.value(), 6.0);
    }

    #[test]
    fn test_individual_exact() {
        let mut individual = Individual::new(encode("2*4").unwrap());
        individual.evaluate(&TargetDistance::new(8.0));
        assert!(individual.is_exact());
    }

    #[test]
    fn test_individual_is_better_than() {
        let ind1 = Individual::with_fitness(Chromosome::zeros(4), 2.0);
        let ind2 = Individual::with_fitness(Chromosome::ones(4), 1.0);
        let ind3 = Individual::new(Chromosome::ones(4));

        assert!(ind1.is_better_than(&ind2));
        assert!(!ind2.is_better_than(&ind1));
        assert!(ind2.is_better_than(&ind3));
        assert!(!ind3.is_better_than(&ind2));
    }

    #[test]
    fn test_individual_partial_ord() {
        let ind1 = Individual::with_fitness(Chromosome::zeros(4), f64::INFINITY);
        let ind2 = Individual::with_fitness(Chromosome::ones(4), 50.0);

        assert!(ind1 > ind2);
        assert!(ind2 < ind1);
    }
}
