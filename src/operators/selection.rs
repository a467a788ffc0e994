//! Selection operators
//!
//! This module provides fitness-proportionate (roulette wheel) selection.

use rand::Rng;

use crate::operators::traits::SelectionOperator;
use crate::population::population::Population;

/// Roulette wheel selection (fitness proportionate)
///
/// Reads the roulette chances computed by [`Population::normalize`], so the
/// population must be normalized before selecting from it.
#[derive(Clone, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }

    /// Index of the first individual whose roulette chance exceeds `r`
    ///
    /// Falls back to the last individual when rounding leaves the final
    /// cumulative chance at or below `r`.
    pub fn spin(population: &Population, r: f64) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        population
            .iter()
            .position(|individual| individual.roulette_chance > r)
            .unwrap_or(population.len() - 1)
    }
}

impl SelectionOperator for RouletteSelection {
    fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        Self::spin(population, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::chromosome::Chromosome;
    use crate::population::individual::Individual;
    use crate::random::SequenceRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn normalized(fitnesses: &[f64]) -> Population {
        let mut population: Population = fitnesses
            .iter()
            .map(|&f| Individual::with_fitness(Chromosome::zeros(4), f))
            .collect();
        population.normalize();
        population
    }

    #[test]
    fn test_spin_picks_interval() {
        // roulette chances: 0.125, 0.5, 1.0
        let population = normalized(&[1.0, 3.0, 4.0]);
        assert_eq!(RouletteSelection::spin(&population, 0.0), 0);
        assert_eq!(RouletteSelection::spin(&population, 0.124), 0);
        assert_eq!(RouletteSelection::spin(&population, 0.125), 1);
        assert_eq!(RouletteSelection::spin(&population, 0.49), 1);
        assert_eq!(RouletteSelection::spin(&population, 0.5), 2);
        assert_eq!(RouletteSelection::spin(&population, 0.999), 2);
    }

    #[test]
    fn test_spin_falls_back_to_last() {
        let mut population = normalized(&[1.0, 1.0]);
        assert_eq!(RouletteSelection::spin(&population, 1.0), 1);

        // simulate drift leaving the last cumulative chance below 1
        population = Population::from_individuals(
            population
                .into_individuals()
                .into_iter()
                .map(|mut i| {
                    i.roulette_chance *= 0.9;
                    i
                })
                .collect(),
        );
        assert_eq!(RouletteSelection::spin(&population, 0.95), 1);
    }

    #[test]
    fn test_spin_skips_zero_chance() {
        let population = normalized(&[1.0, f64::INFINITY, 1.0]);
        assert_eq!(RouletteSelection::spin(&population, 0.0), 1);
        assert_eq!(RouletteSelection::spin(&population, 0.7), 1);
    }

    #[test]
    fn test_select_uses_injected_draw() {
        let population = normalized(&[1.0, 3.0, 4.0]);
        let mut rng = SequenceRng::new(vec![0.1, 0.3, 0.75]);
        let selection = RouletteSelection::new();

        assert_eq!(selection.select_many(&population, 3, &mut rng), vec![0, 1, 2]);
    }

    #[test]
    fn test_select_prefers_fitter() {
        let population = normalized(&[1.0, 99.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let selection = RouletteSelection::new();

        let hits = (0..1000)
            .filter(|_| selection.select(&population, &mut rng) == 1)
            .count();
        assert!(hits > 900, "Expected mostly the fitter individual, got {}", hits);
    }

    #[test]
    #[should_panic(expected = "Population cannot be empty")]
    fn test_spin_empty_population() {
        RouletteSelection::spin(&Population::new(), 0.5);
    }
}
