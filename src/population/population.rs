//! Population type
//!
//! This module provides the Population container type and the fitness
//! normalization that turns fitness into roulette-wheel intervals.

use rand::Rng;

use crate::fitness::traits::Fitness;
use crate::genome::chromosome::Chromosome;
use crate::population::individual::Individual;

/// An ordered population of individuals
#[derive(Clone, Debug, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create `size` unevaluated individuals with random chromosomes of
    /// `chromosome_length` bits
    pub fn random<R: Rng>(chromosome_length: usize, size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(Chromosome::random(chromosome_length, rng)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Shorten the population, keeping the first `size` individuals
    pub fn truncate(&mut self, size: usize) {
        self.individuals.truncate(size);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Evaluate every unevaluated individual
    pub fn evaluate<Fit: Fitness + ?Sized>(&mut self, fitness: &Fit) {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.evaluate(fitness);
            }
        }
    }

    /// Sum of all fitness values (unevaluated individuals count as zero)
    pub fn total_fitness(&self) -> f64 {
        self.individuals.iter().map(Individual::fitness_or_zero).sum()
    }

    /// Recompute selection and roulette chances from fitness
    ///
    /// Each selection chance is `fitness / total_fitness` and the roulette
    /// chance is the running sum of selection chances in population order.
    /// When some fitness values are infinite those individuals split the
    /// wheel evenly and everyone else gets nothing. When the total is zero
    /// the wheel is split evenly across the whole population.
    pub fn normalize(&mut self) {
        let n = self.individuals.len();
        if n == 0 {
            return;
        }

        let infinite = self
            .individuals
            .iter()
            .filter(|i| i.fitness_or_zero() == f64::INFINITY)
            .count();
        let total = self.total_fitness();

        for individual in &mut self.individuals {
            let fitness = individual.fitness_or_zero();
            individual.selection_chance = if infinite > 0 {
                if fitness == f64::INFINITY {
                    1.0 / infinite as f64
                } else {
                    0.0
                }
            } else if total > 0.0 && total.is_finite() {
                fitness / total
            } else {
                1.0 / n as f64
            };
        }

        let mut cumulative = 0.0;
        for individual in &mut self.individuals {
            cumulative += individual.selection_chance;
            individual.roulette_chance = cumulative;
        }
    }

    /// Get the best individual (by fitness)
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .max_by(|a, b| {
                a.fitness_or_zero()
                    .partial_cmp(&b.fitness_or_zero())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Sort the population by fitness (best first)
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| {
            let fa = a.fitness.unwrap_or(f64::NEG_INFINITY);
            let fb = b.fitness.unwrap_or(f64::NEG_INFINITY);
            fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Compute mean fitness over evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Mean pairwise Hamming distance, normalised by chromosome length
    pub fn diversity(&self) -> f64 {
        let n = self.individuals.len();
        if n < 2 {
            return 0.0;
        }
        let length = self.individuals[0].genome.len();
        if length == 0 {
            return 0.0;
        }

        // a bit position with k ones differs across k * (n - k) pairs
        let differing: usize = (0..length)
            .map(|b| {
                let ones = self
                    .individuals
                    .iter()
                    .filter(|i| i.genome.get(b).unwrap_or(false))
                    .count();
                ones * (n - ones)
            })
            .sum();
        let pairs = n * (n - 1) / 2;
        differing as f64 / (pairs * length) as f64
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
