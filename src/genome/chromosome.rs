//! Chromosome genome
//!
//! This module provides the fixed-length bit string that encodes a candidate
//! expression, four bits per gene.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::gene::{Gene, GENE_WIDTH};

/// Fixed-length bit string grouped into 4-bit genes
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Create a new chromosome with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros chromosome of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones chromosome of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Generate a uniformly random chromosome
    ///
    /// Each bit is a unit draw rounded to the nearest integer.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.gen::<f64>() >= 0.5).collect();
        Self { bits }
    }

    /// Build a chromosome from a sequence of genes
    pub fn from_genes<I: IntoIterator<Item = Gene>>(genes: I) -> Self {
        let bits = genes.into_iter().flat_map(|g| g.bits()).collect();
        Self { bits }
    }

    /// Get the length in bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the chromosome is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Flip a specific bit
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// The raw bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Iterate over the complete 4-bit genes; trailing bits are ignored
    pub fn genes(&self) -> impl Iterator<Item = Gene> + '_ {
        self.bits.chunks_exact(GENE_WIDTH).map(Gene::from_bits)
    }

    /// Number of complete genes
    pub fn gene_count(&self) -> usize {
        self.bits.len() / GENE_WIDTH
    }

    /// Join `self[..point]` with `other[point..]`
    pub fn splice(&self, other: &Self, point: usize) -> Result<Self, GenomeError> {
        if self.len() != other.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let point = point.min(self.len());
        let bits = self.bits[..point]
            .iter()
            .chain(&other.bits[point..])
            .copied()
            .collect();
        Ok(Self { bits })
    }

    /// Hamming distance to another chromosome
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl FromStr for Chromosome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GenomeError::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
