//! Evolutionary algorithms
//!
//! This module provides the generational algorithm driver.

pub mod generational;

pub mod prelude {
    pub use super::generational::*;
}
