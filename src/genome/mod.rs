//! Genome types
//!
//! This module provides the chromosome bit string and its 4-bit gene codes.

pub mod chromosome;
pub mod gene;

pub mod prelude {
    pub use super::chromosome::*;
    pub use super::gene::*;
}
