//! Fitness evaluation
//!
//! This module provides the fitness trait and the target-distance fitness.

pub mod target;
pub mod traits;

pub mod prelude {
    pub use super::target::*;
    pub use super::traits::*;
}
