//! Chromosome to expression codec
//!
//! Decoding maps every gene to its symbol and then filters the symbol stream
//! so that digits and operators strictly alternate, starting and ending on a
//! digit.

use crate::error::GenomeError;
use crate::genome::chromosome::Chromosome;
use crate::genome::gene::{Gene, Symbol};

/// What the alternation filter accepts next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterState {
    ExpectNumber,
    ExpectOperator,
}

impl FilterState {
    /// Feed one symbol; returns the next state and whether the symbol is kept
    pub fn step(self, symbol: Option<Symbol>) -> (Self, bool) {
        match (self, symbol) {
            (Self::ExpectNumber, Some(s)) if s.is_digit() => (Self::ExpectOperator, true),
            (Self::ExpectOperator, Some(s)) if s.is_operator() => (Self::ExpectNumber, true),
            (state, _) => (state, false),
        }
    }
}

/// Map each complete gene to its symbol, unmapped codes become `None`
pub fn decode_symbols(chromosome: &Chromosome) -> Vec<Option<Symbol>> {
    chromosome.genes().map(Gene::symbol).collect()
}

/// Keep only the symbols that extend a digit/operator alternation
pub fn filter_symbols<I>(symbols: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = Option<Symbol>>,
{
    let mut state = FilterState::ExpectNumber;
    let mut accepted = Vec::new();

    for symbol in symbols {
        let (next, keep) = state.step(symbol);
        if keep {
            if let Some(s) = symbol {
                accepted.push(s);
            }
        }
        state = next;
    }

    // a dangling operator leaves the filter expecting a number
    if state == FilterState::ExpectNumber {
        accepted.pop();
    }
    accepted
}

/// Decode a chromosome into a well-formed expression string
pub fn decode(chromosome: &Chromosome) -> String {
    filter_symbols(decode_symbols(chromosome))
        .into_iter()
        .map(Symbol::as_char)
        .collect()
}

/// Encode an expression string, one gene per character
pub fn encode(expression: &str) -> Result<Chromosome, GenomeError> {
    let genes = expression
        .chars()
        .map(Gene::from_char)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Chromosome::from_genes(genes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromosome(bits: &str) -> Chromosome {
        bits.parse().unwrap()
    }

    #[test]
    fn test_decode_sample() {
        // 2 2 + (1110) - 7 2 and a 1-bit tail
        let c = chromosome("00100010101011101011011100101");
        assert_eq!(decode(&c), "2+7");
    }

    #[test]
    fn test_decode_drops_trailing_operator() {
        let c = encode("3+4*").unwrap();
        assert_eq!(decode(&c), "3+4");
    }

    #[test]
    fn test_decode_skips_leading_operators() {
        let c = encode("*/-5+1").unwrap();
        assert_eq!(decode(&c), "5+1");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&Chromosome::new(vec![])), "");
        assert_eq!(decode(&encode("+-*/").unwrap()), "");
        assert_eq!(decode(&Chromosome::ones(16)), "");
    }

    #[test]
    fn test_decode_single_digit() {
        assert_eq!(decode(&encode("9").unwrap()), "9");
        assert_eq!(decode(&encode("9+").unwrap()), "9");
    }

    #[test]
    fn test_decode_ignores_unmapped_genes() {
        let c = chromosome("0001111010101111111100110000");
        assert_eq!(decode(&c), "1+3");
    }

    #[test]
    fn test_encode_rejects_unknown_symbol() {
        assert_eq!(encode("1=1"), Err(GenomeError::UnencodableSymbol('=')));
    }

    #[test]
    fn test_filter_state_transitions() {
        use crate::genome::gene::Operator;

        let digit = Some(Symbol::Digit(1));
        let op = Some(Symbol::Op(Operator::Add));

        assert_eq!(
            FilterState::ExpectNumber.step(digit),
            (FilterState::ExpectOperator, true)
        );
        assert_eq!(
            FilterState::ExpectNumber.step(op),
            (FilterState::ExpectNumber, false)
        );
        assert_eq!(
            FilterState::ExpectOperator.step(op),
            (FilterState::ExpectNumber, true)
        );
        assert_eq!(
            FilterState::ExpectOperator.step(digit),
            (FilterState::ExpectOperator, false)
        );
        assert_eq!(
            FilterState::ExpectOperator.step(None),
            (FilterState::ExpectOperator, false)
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let c = chromosome("0110101001011100010011010010101000010000");
        assert_eq!(decode(&c), decode(&c));
    }
}
