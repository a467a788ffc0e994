//! Target-distance fitness
//!
//! Scores a chromosome by the inverse distance between the value of its
//! decoded expression and a numeric target.

use serde::{Deserialize, Serialize};

use crate::expression::codec::decode;
use crate::expression::evaluator::evaluate;
use crate::fitness::traits::Fitness;
use crate::genome::chromosome::Chromosome;

/// `1 / |target - value|`, infinite on an exact match
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetDistance {
    target: f64,
}

impl TargetDistance {
    /// Create a fitness function for the given target
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// The target value
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The value of the chromosome's decoded expression
    pub fn value(chromosome: &Chromosome) -> f64 {
        evaluate(&decode(chromosome))
    }

    /// Fitness of an already evaluated expression value
    pub fn score(&self, value: f64) -> f64 {
        let distance = (self.target - value).abs();
        if distance == 0.0 {
            f64::INFINITY
        } else {
            1.0 / distance
        }
    }
}

impl Fitness for TargetDistance {
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        self.score(Self::value(chromosome))
    }
}
