//! Error types for arith-evo
//!
//! Domain degradations (division by zero, an exact hit on the target) are
//! plain values. The enums here only cover malformed input and configuration.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// A character other than `0` or `1` appeared in a bit string
    #[error("Invalid bit character: {0:?}")]
    InvalidBit(char),

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Chromosome length is not a positive multiple of the gene width
    #[error("Invalid chromosome length {length}: must be a positive multiple of 4")]
    InvalidLength { length: usize },

    /// A character that has no gene code
    #[error("Symbol {0:?} has no gene encoding")]
    UnencodableSymbol(char),
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Result of an operator application
#[derive(Debug, Clone)]
pub enum OperatorResult<G> {
    /// Operation succeeded
    Success(G),
    /// Operation failed unrecoverably
    Failed(OperatorError),
}

impl<G> OperatorResult<G> {
    /// Returns the genome if successful, None if failed
    pub fn genome(self) -> Option<G> {
        match self {
            Self::Success(g) => Some(g),
            Self::Failed(_) => None,
        }
    }

    /// Returns true if the operation was successful
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<G, OperatorError> {
        match self {
            Self::Success(g) => Ok(g),
            Self::Failed(e) => Err(e),
        }
    }

    /// Maps the genome type
    pub fn map<U, F: FnOnce(G) -> U>(self, f: F) -> OperatorResult<U> {
        match self {
            Self::Success(g) => OperatorResult::Success(f(g)),
            Self::Failed(e) => OperatorResult::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::InvalidBit('x');
        assert_eq!(err.to_string(), "Invalid bit character: 'x'");

        let err = GenomeError::DimensionMismatch {
            expected: 8,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 8, got 4");

        let err = GenomeError::InvalidLength { length: 7 };
        assert_eq!(
            err.to_string(),
            "Invalid chromosome length 7: must be a positive multiple of 4"
        );
    }

    #[test]
    fn test_evolution_error_from_genome_error() {
        let genome_err = GenomeError::UnencodableSymbol('%');
        let evo_err: EvolutionError = genome_err.into();
        assert!(matches!(evo_err, EvolutionError::Genome(_)));
        assert_eq!(
            evo_err.to_string(),
            "Genome error: Symbol '%' has no gene encoding"
        );
    }

    #[test]
    fn test_operator_result_success() {
        let result: OperatorResult<i32> = OperatorResult::Success(42);
        assert!(result.is_ok());
        assert_eq!(result.genome(), Some(42));
    }

    #[test]
    fn test_operator_result_failed() {
        let result: OperatorResult<i32> =
            OperatorResult::Failed(OperatorError::CrossoverFailed("test".to_string()));
        assert!(!result.is_ok());
        assert!(result.clone().into_result().is_err());
        assert_eq!(result.genome(), None);
    }

    #[test]
    fn test_operator_result_map() {
        let result: OperatorResult<i32> = OperatorResult::Success(21);
        assert_eq!(result.map(|x| x * 2).genome(), Some(42));
    }
}
