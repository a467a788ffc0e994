//! Gene codes
//!
//! A gene is a 4-bit group of a chromosome. Fourteen of the sixteen codes map
//! to a symbol: `0000`..`1001` are the digits 0-9 and `1010`..`1101` are
//! `+ - * /`. The codes `1110` and `1111` have no symbol.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// Number of bits in one gene
pub const GENE_WIDTH: usize = 4;

/// Binary arithmetic operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse an operator character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character for this operator
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Apply the operator to two operands
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// A decoded gene: either a decimal digit or an operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Decimal digit 0-9
    Digit(u8),
    /// Arithmetic operator
    Op(Operator),
}

impl Symbol {
    /// Parse a single expression character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_digit(10) {
            Some(d) => Some(Self::Digit(d as u8)),
            None => Operator::from_char(c).map(Self::Op),
        }
    }

    /// The expression character for this symbol
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Op(op) => op.as_char(),
        }
    }

    /// Check if this symbol is a digit
    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Check if this symbol is an operator
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Op(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 4-bit gene code (0..=15)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene(u8);

impl Gene {
    /// Build a gene from up to four bits, most significant first
    pub fn from_bits(bits: &[bool]) -> Self {
        let code = bits
            .iter()
            .take(GENE_WIDTH)
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        Self(code)
    }

    /// Gene for a symbol
    pub fn from_symbol(symbol: Symbol) -> Self {
        let code = match symbol {
            Symbol::Digit(d) => d,
            Symbol::Op(Operator::Add) => 10,
            Symbol::Op(Operator::Sub) => 11,
            Symbol::Op(Operator::Mul) => 12,
            Symbol::Op(Operator::Div) => 13,
        };
        Self(code)
    }

    /// Gene for an expression character
    pub fn from_char(c: char) -> Result<Self, GenomeError> {
        Symbol::from_char(c)
            .map(Self::from_symbol)
            .ok_or(GenomeError::UnencodableSymbol(c))
    }

    /// The raw 4-bit code
    pub fn code(self) -> u8 {
        self.0
    }

    /// The four bits of this gene, most significant first
    pub fn bits(self) -> [bool; GENE_WIDTH] {
        [
            self.0 & 0b1000 != 0,
            self.0 & 0b0100 != 0,
            self.0 & 0b0010 != 0,
            self.0 & 0b0001 != 0,
        ]
    }

    /// Symbol for this gene, `None` for the two unmapped codes
    pub fn symbol(self) -> Option<Symbol> {
        match self.0 {
            d @ 0..=9 => Some(Symbol::Digit(d)),
            10 => Some(Symbol::Op(Operator::Add)),
            11 => Some(Symbol::Op(Operator::Sub)),
            12 => Some(Symbol::Op(Operator::Mul)),
            13 => Some(Symbol::Op(Operator::Div)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_from_bits() {
        assert_eq!(Gene::from_bits(&[false, false, true, false]).code(), 2);
        assert_eq!(Gene::from_bits(&[true, true, false, true]).code(), 13);
        assert_eq!(Gene::from_bits(&[true, true, true, true]).code(), 15);
    }

    #[test]
    fn test_gene_symbol_table() {
        for d in 0..=9u8 {
            assert_eq!(Gene(d).symbol(), Some(Symbol::Digit(d)));
        }
        assert_eq!(Gene(10).symbol(), Some(Symbol::Op(Operator::Add)));
        assert_eq!(Gene(11).symbol(), Some(Symbol::Op(Operator::Sub)));
        assert_eq!(Gene(12).symbol(), Some(Symbol::Op(Operator::Mul)));
        assert_eq!(Gene(13).symbol(), Some(Symbol::Op(Operator::Div)));
    }

    #[test]
    fn test_unmapped_codes() {
        assert_eq!(Gene(14).symbol(), None);
        assert_eq!(Gene(15).symbol(), None);
    }

    #[test]
    fn test_gene_bits_roundtrip() {
        for code in 0..16u8 {
            let gene = Gene(code);
            assert_eq!(Gene::from_bits(&gene.bits()), gene);
        }
    }

    #[test]
    fn test_gene_from_char() {
        assert_eq!(Gene::from_char('7').unwrap().code(), 7);
        assert_eq!(Gene::from_char('/').unwrap().code(), 13);
        assert_eq!(
            Gene::from_char('x'),
            Err(GenomeError::UnencodableSymbol('x'))
        );
    }

    #[test]
    fn test_symbol_chars() {
        assert_eq!(Symbol::from_char('4'), Some(Symbol::Digit(4)));
        assert_eq!(Symbol::Digit(4).as_char(), '4');
        assert_eq!(Symbol::Op(Operator::Mul).to_string(), "*");
        assert_eq!(Symbol::from_char('('), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Sub.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Mul.apply(3.0, 4.0), 12.0);
        assert_eq!(Operator::Div.apply(3.0, 4.0), 0.75);
        assert!(Operator::Div.apply(5.0, 0.0).is_infinite());
    }
}
