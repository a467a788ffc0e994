//! Target Search
//!
//! Evolves 100-bit chromosomes until their decoded expression evaluates as
//! close as possible to a target value.
//!
//! Run with `RUST_LOG=debug` to see per-generation progress. An optional
//! argument names a JSON file holding a `GAConfig`; missing fields take
//! their defaults.

use std::fs::File;

use arith_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => GAConfig {
            generations: 500,
            ..GAConfig::default()
        },
    };

    println!("=== Target Search ===\n");
    println!("  Target:          {}", config.target);
    println!("  Chromosome bits: {}", config.chromosome_length);
    println!("  Population:      {}", config.population_size);
    println!("  Generations:     {}\n", config.generations);

    // Create a seeded RNG for reproducibility
    let mut rng = StdRng::seed_from_u64(42);

    let result = GenerationalGA::builder()
        .config(config)
        .build()?
        .run(&mut rng)?;

    println!("Evolution complete!");
    println!("  Best expression: {}", result.best_expression);
    println!("  Value:           {}", result.best_value);
    println!("  Fitness:         {}", result.best_fitness());
    println!("  Chromosome:      {}", result.best_chromosome());

    match result.stats.first_exact_generation() {
        Some(generation) => println!("\nFirst exact match in generation {}", generation),
        None => println!("\nNo exact match found"),
    }

    Ok(())
}
