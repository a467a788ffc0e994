//! Generational Genetic Algorithm
//!
//! This module implements the fixed-length generational loop that evolves
//! chromosomes toward an expression evaluating to a target value. Every
//! generation replaces the whole population: roulette selection of parent
//! pairs, rate-gated one-point crossover, bit-flip mutation, re-evaluation
//! and normalization. The loop always runs the configured number of
//! generations.

use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError, GenomeError};
use crate::fitness::target::TargetDistance;
use crate::genome::chromosome::Chromosome;
use crate::genome::gene::GENE_WIDTH;
use crate::operators::crossover::OnePointCrossover;
use crate::operators::mutation::BitFlipMutation;
use crate::operators::selection::RouletteSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Default probability that a selected pair is recombined
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.7;

/// Configuration for the generational GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GAConfig {
    /// Chromosome length in bits, a positive multiple of 4
    pub chromosome_length: usize,
    /// Population size
    pub population_size: usize,
    /// Value the decoded expressions should evaluate to
    pub target: f64,
    /// Number of generations to run
    pub generations: usize,
    /// Probability that a selected pair is recombined
    pub crossover_rate: f64,
}

impl Default for GAConfig {
    fn default() -> Self {
        Self {
            chromosome_length: 100,
            population_size: 100,
            target: 100.0,
            generations: 10_000,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
        }
    }
}

impl GAConfig {
    /// Check the configuration for values the algorithm cannot run with
    pub fn validate(&self) -> EvoResult<()> {
        if self.chromosome_length == 0 || self.chromosome_length % GENE_WIDTH != 0 {
            return Err(GenomeError::InvalidLength {
                length: self.chromosome_length,
            }
            .into());
        }
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if !self.target.is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "Target must be finite, got {}",
                self.target
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvolutionError::Configuration(format!(
                "Crossover rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        Ok(())
    }
}

/// Builder for GenerationalGA
pub struct GenerationalGABuilder<S, C, M> {
    config: GAConfig,
    selection: S,
    crossover: C,
    mutation: M,
}

impl GenerationalGABuilder<RouletteSelection, OnePointCrossover, BitFlipMutation> {
    /// Create a new builder with default configuration and operators
    pub fn new() -> Self {
        Self {
            config: GAConfig::default(),
            selection: RouletteSelection::new(),
            crossover: OnePointCrossover::new(),
            mutation: BitFlipMutation::new(),
        }
    }
}

impl Default for GenerationalGABuilder<RouletteSelection, OnePointCrossover, BitFlipMutation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C, M> GenerationalGABuilder<S, C, M> {
    /// Replace the whole configuration
    pub fn config(mut self, config: GAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the chromosome length in bits
    pub fn chromosome_length(mut self, length: usize) -> Self {
        self.config.chromosome_length = length;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the target value
    pub fn target(mut self, target: f64) -> Self {
        self.config.target = target;
        self
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the probability that a selected pair is recombined
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.config.crossover_rate = rate;
        self
    }

    /// Set the selection operator
    pub fn selection<NewS: SelectionOperator>(
        self,
        selection: NewS,
    ) -> GenerationalGABuilder<NewS, C, M> {
        GenerationalGABuilder {
            config: self.config,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC: CrossoverOperator>(
        self,
        crossover: NewC,
    ) -> GenerationalGABuilder<S, NewC, M> {
        GenerationalGABuilder {
            config: self.config,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM: MutationOperator>(
        self,
        mutation: NewM,
    ) -> GenerationalGABuilder<S, C, NewM> {
        GenerationalGABuilder {
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
        }
    }
}

impl<S, C, M> GenerationalGABuilder<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Build the GenerationalGA instance
    pub fn build(self) -> EvoResult<GenerationalGA<S, C, M>> {
        self.config.validate()?;
        Ok(GenerationalGA {
            fitness: TargetDistance::new(self.config.target),
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
        })
    }
}

/// Final state of a run
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// Final population, best first
    pub population: Population,
    /// Best individual of the final population
    pub best: Individual,
    /// Decoded expression of the best individual
    pub best_expression: String,
    /// Value of the best expression
    pub best_value: f64,
    /// Number of generations run
    pub generations: usize,
    /// Per-generation statistics
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Chromosome of the best individual
    pub fn best_chromosome(&self) -> &Chromosome {
        self.best.genome()
    }

    /// Fitness of the best individual
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness_or_zero()
    }
}

/// Generational genetic algorithm over expression chromosomes
pub struct GenerationalGA<S = RouletteSelection, C = OnePointCrossover, M = BitFlipMutation> {
    config: GAConfig,
    fitness: TargetDistance,
    selection: S,
    crossover: C,
    mutation: M,
}

impl GenerationalGA {
    /// Create a builder for GenerationalGA
    pub fn builder() -> GenerationalGABuilder<RouletteSelection, OnePointCrossover, BitFlipMutation>
    {
        GenerationalGABuilder::new()
    }
}

impl<S, C, M> GenerationalGA<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// The configuration this GA runs with
    pub fn config(&self) -> &GAConfig {
        &self.config
    }

    /// The fitness function
    pub fn fitness(&self) -> &TargetDistance {
        &self.fitness
    }

    /// Random, evaluated and normalized starting population
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Population {
        let mut population = Population::random(
            self.config.chromosome_length,
            self.config.population_size,
            rng,
        );
        population.evaluate(&self.fitness);
        population.normalize();
        population
    }

    /// Recombine two parents with probability `crossover_rate`
    ///
    /// The first draw gates the operation: above the rate both parents are
    /// copied unchanged. The children are always new chromosomes.
    pub fn crossover_pair<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> EvoResult<(Chromosome, Chromosome)> {
        let r: f64 = rng.gen();
        if r > self.config.crossover_rate {
            return Ok((parent1.clone(), parent2.clone()));
        }
        self.crossover
            .crossover(parent1, parent2, rng)
            .into_result()
            .map_err(EvolutionError::from)
    }

    /// Breed the next generation from a normalized population
    ///
    /// Offspring are produced in pairs until the configured size is reached;
    /// an odd size drops the surplus child of the last pair.
    pub fn next_generation<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> EvoResult<Population> {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let size = self.config.population_size;
        let birth = population.generation() + 1;
        let mut offspring = Population::with_capacity(size + 1);

        while offspring.len() < size {
            let parent1 = &population[self.selection.select(population, rng)];
            let parent2 = &population[self.selection.select(population, rng)];

            let (child1, child2) = self.crossover_pair(parent1.genome(), parent2.genome(), rng)?;

            offspring.push(Individual::with_generation(child1, birth));
            offspring.push(Individual::with_generation(child2, birth));
        }
        offspring.truncate(size);

        let mut next: Population = offspring
            .into_individuals()
            .into_iter()
            .map(|mut individual| {
                self.mutation.mutate(&mut individual.genome, rng);
                individual
            })
            .collect();

        next.evaluate(&self.fitness);
        next.normalize();
        next.set_generation(birth);
        Ok(next)
    }

    /// Run the configured number of generations
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        info!(
            "Evolving {} chromosomes of {} bits toward {} for {} generations",
            self.config.population_size,
            self.config.chromosome_length,
            self.config.target,
            self.config.generations
        );

        let mut stats = EvolutionStats::new();
        let mut population = self.initial_population(rng);
        stats.record(self.observe(&population));

        for _ in 0..self.config.generations {
            population = self.next_generation(&population, rng)?;
            stats.record(self.observe(&population));
        }

        population.sort_by_fitness();
        let best = population
            .get(0)
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)?;
        let best_expression = best.expression();
        let best_value = best.value();

        info!(
            "Finished after {} generations: best {:?} = {} (fitness {}, chromosome {})",
            population.generation(),
            best_expression,
            best_value,
            best.fitness_or_zero(),
            best.genome()
        );

        Ok(EvolutionResult {
            generations: population.generation(),
            population,
            best,
            best_expression,
            best_value,
            stats,
        })
    }

    fn observe(&self, population: &Population) -> GenerationStats {
        let stats = GenerationStats::from_population(population);
        debug!(
            "generation {}: best {} ({:?}), mean {:.6}, diversity {:.3}",
            stats.generation,
            stats.best_fitness,
            stats.best_expression,
            stats.mean_fitness,
            stats.diversity
        );
        if stats.exact_matches > 0 {
            trace!(
                "generation {}: {} exact matches for {}",
                stats.generation,
                stats.exact_matches,
                self.config.target
            );
        }
        stats
    }
}

/// Build and run a GA with default operators, returning the final
/// population sorted best first
pub fn run<R: Rng>(
    chromosome_length: usize,
    population_size: usize,
    target: f64,
    generations: usize,
    rng: &mut R,
) -> EvoResult<Population> {
    let result = GenerationalGA::builder()
        .chromosome_length(chromosome_length)
        .population_size(population_size)
        .target(target)
        .generations(generations)
        .build()?
        .run(rng)?;
    Ok(result.population)
}
