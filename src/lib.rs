//! # arith-evo
//!
//! A genetic algorithm that evolves fixed-length bit strings until they decode
//! into an arithmetic expression whose value is as close as possible to a
//! target number.
//!
//! ## Core Concepts
//!
//! - **Chromosomes**: bit strings read as 4-bit genes, each gene a digit or one
//!   of `+ - * /`
//! - **Decoding**: genes are filtered into a strictly alternating
//!   digit/operator expression and reduced left to right without precedence
//! - **Fitness**: `1 / |target - value|`, infinite on an exact hit
//! - **Evolution**: roulette selection, one-point crossover and bit-flip
//!   mutation over a fixed number of generations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arith_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = GenerationalGA::builder()
//!     .chromosome_length(100)
//!     .population_size(100)
//!     .target(42.0)
//!     .generations(500)
//!     .build()?
//!     .run(&mut rng)?;
//!
//! println!("{} = {}", result.best_expression, result.best_value);
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod expression;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod random;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::expression::prelude::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::random::SequenceRng;
}
