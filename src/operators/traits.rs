//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::OperatorResult;
use crate::genome::chromosome::Chromosome;
use crate::population::population::Population;

/// Selection operator trait
///
/// Selects individuals from a normalized population for reproduction.
pub trait SelectionOperator {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize;

    /// Select multiple individuals from the population
    fn select_many<R: Rng>(
        &self,
        population: &Population,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        (0..count).map(|_| self.select(population, rng)).collect()
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create offspring.
pub trait CrossoverOperator {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> OperatorResult<(Chromosome, Chromosome)>;
}

/// Mutation operator trait
///
/// Applies random changes to a chromosome.
pub trait MutationOperator {
    /// Apply mutation to a chromosome in place
    fn mutate<R: Rng>(&self, genome: &mut Chromosome, rng: &mut R);

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}
