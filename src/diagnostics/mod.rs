//! Diagnostics and statistics
//!
//! This module provides per-generation summaries for an evolutionary run.

use serde::{Deserialize, Serialize};

use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Population size
    pub population_size: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Individuals whose expression hits the target exactly
    pub exact_matches: usize,
    /// Population diversity
    pub diversity: f64,
    /// Decoded expression of the best individual
    pub best_expression: String,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population) -> Self {
        let best = population.best();
        Self {
            generation: population.generation(),
            population_size: population.len(),
            best_fitness: best.and_then(|i| i.fitness).unwrap_or(0.0),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            exact_matches: population.iter().filter(|i| i.is_exact()).count(),
            diversity: population.diversity(),
            best_expression: best.map(|i| i.expression()).unwrap_or_default(),
        }
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation, the initial population included
    pub generations: Vec<GenerationStats>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// First generation that contained an exact match
    pub fn first_exact_generation(&self) -> Option<usize> {
        self.generations
            .iter()
            .find(|g| g.exact_matches > 0)
            .map(|g| g.generation)
    }
}

pub mod prelude {
    pub use super::{EvolutionStats, GenerationStats};
}
