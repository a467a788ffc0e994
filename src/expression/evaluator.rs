//! Expression evaluator
//!
//! Reduces an expression strictly left to right with no operator precedence:
//! `1+2*3` is `(1+2)*3`. Every operand is a single character.

use crate::genome::gene::Operator;

fn operand(c: char) -> f64 {
    c.to_digit(10).map(f64::from).unwrap_or(f64::NAN)
}

/// Evaluate an expression string
///
/// Returns 0 for the empty string and for any expression whose reduction
/// produces a non-finite value (division by zero, a non-digit operand).
/// An operator at the end of the string leaves the accumulator unchanged, as
/// does any character that is not an operator.
pub fn evaluate(expr: &str) -> f64 {
    let chars: Vec<char> = expr.chars().collect();
    let Some(&first) = chars.first() else {
        return 0.0;
    };

    let mut acc = operand(first);
    for (i, &c) in chars.iter().enumerate().skip(1) {
        let Some(op) = Operator::from_char(c) else {
            continue;
        };
        if let Some(&next) = chars.get(i + 1) {
            acc = op.apply(acc, operand(next));
        }
        if !acc.is_finite() {
            return 0.0;
        }
    }

    if acc.is_finite() {
        acc
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(evaluate(""), 0.0);
    }

    #[test]
    fn test_evaluate_single_digit() {
        assert_eq!(evaluate("7"), 7.0);
    }

    #[test]
    fn test_evaluate_addition() {
        assert_eq!(evaluate("3+4"), 7.0);
    }

    #[test]
    fn test_evaluate_has_no_precedence() {
        assert_eq!(evaluate("3+4*2"), 14.0);
        assert_eq!(evaluate("1+2*3"), 9.0);
        assert_eq!(evaluate("8-2/3"), 2.0);
    }

    #[test]
    fn test_evaluate_fractional_division() {
        assert_eq!(evaluate("1/4"), 0.25);
        assert!((evaluate("1/3*3") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_negative_result() {
        assert_eq!(evaluate("2-9"), -7.0);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate("5/0"), 0.0);
        assert_eq!(evaluate("0/0"), 0.0);
        assert_eq!(evaluate("5/0*0+3"), 0.0);
    }

    #[test]
    fn test_evaluate_trailing_operator() {
        assert_eq!(evaluate("6*"), 6.0);
    }

    #[test]
    fn test_evaluate_non_digit_operand() {
        assert_eq!(evaluate("+3"), 0.0);
        assert_eq!(evaluate("3++4"), 0.0);
    }

    #[test]
    fn test_evaluate_skips_unpaired_digits() {
        // only the digit that follows an operator is an operand
        assert_eq!(evaluate("12+3"), 4.0);
    }
}
