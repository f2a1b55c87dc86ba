//! Reverse-Polish calculator
//!
//! Evaluates whitespace-separated RPN over single-digit operands with
//! checked 64-bit arithmetic. Operators pop two values and push one; a
//! well-formed expression leaves exactly one value on the stack.

use thiserror::Error;

/// Errors from RPN evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RpnError {
    /// A token was neither a single digit nor an operator.
    #[error("invalid token '{token}'")]
    InvalidToken {
        /// Offending token.
        token: String,
    },

    /// An operator found fewer than two stacked operands.
    #[error("operator '{op}' is missing operands")]
    MissingOperands {
        /// Operator that could not be applied.
        op: char,
    },

    /// The right operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A checked arithmetic operation overflowed.
    #[error("arithmetic overflow")]
    Overflow,

    /// Evaluation ended with an unexpected number of stacked values.
    #[error("expression left {remaining} values on the stack")]
    UnbalancedExpression {
        /// Stack size after the final token.
        remaining: usize,
    },
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    fn apply(self, a: i64, b: i64) -> Result<i64, RpnError> {
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
            Self::Mul => a.checked_mul(b),
            Self::Div => {
                if b == 0 {
                    return Err(RpnError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(RpnError::Overflow)
    }
}

/// Evaluate a reverse-Polish expression.
///
/// Tokens are whitespace-separated. A single decimal digit pushes its
/// value; `+`, `-`, `*`, and `/` pop the top two values and push the
/// result, the first pop being the right operand. Anything else,
/// multi-digit numbers included, is rejected.
pub fn evaluate(expression: &str) -> Result<i64, RpnError> {
    let mut stack: Vec<i64> = Vec::new();

    for token in expression.split_whitespace() {
        if let Some(op) = Operator::parse(token) {
            let b = stack.pop().ok_or(RpnError::MissingOperands { op: op.symbol() })?;
            let a = stack.pop().ok_or(RpnError::MissingOperands { op: op.symbol() })?;
            stack.push(op.apply(a, b)?);
        } else if let Some(value) = parse_digit(token) {
            stack.push(value);
        } else {
            return Err(RpnError::InvalidToken {
                token: token.to_string(),
            });
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(RpnError::UnbalancedExpression {
            remaining: stack.len(),
        }),
    }
}

fn parse_digit(token: &str) -> Option<i64> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(i64::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("8 9 * 9 - 9 - 9 - 4 - 1 +", 42)]
    #[test_case("7 7 * 7 -", 42)]
    #[test_case("1 2 * 2 / 2 * 2 4 - +", 0)]
    #[test_case("5", 5)]
    #[test_case("1 2 -", -1)]
    #[test_case("7 2 /", 3 ; "division truncates")]
    #[test_case("1 2 - 2 /", 0 ; "truncation goes toward zero")]
    fn evaluates(expression: &str, expected: i64) {
        assert_eq!(evaluate(expression), Ok(expected));
    }

    #[test]
    fn rejects_non_rpn_syntax() {
        assert_eq!(
            evaluate("(1 + 1)"),
            Err(RpnError::InvalidToken {
                token: "(1".to_string()
            })
        );
        assert_eq!(
            evaluate("12 3 +"),
            Err(RpnError::InvalidToken {
                token: "12".to_string()
            }),
            "multi-digit operands are not allowed"
        );
    }

    #[test]
    fn rejects_division_by_zero() {
        assert_eq!(evaluate("5 0 /"), Err(RpnError::DivisionByZero));
    }

    #[test]
    fn rejects_starved_operators() {
        assert_eq!(evaluate("+"), Err(RpnError::MissingOperands { op: '+' }));
        assert_eq!(evaluate("1 +"), Err(RpnError::MissingOperands { op: '+' }));
    }

    #[test]
    fn rejects_unbalanced_stacks() {
        assert_eq!(
            evaluate("1 2"),
            Err(RpnError::UnbalancedExpression { remaining: 2 })
        );
        assert_eq!(
            evaluate(""),
            Err(RpnError::UnbalancedExpression { remaining: 0 })
        );
        assert_eq!(
            evaluate("   "),
            Err(RpnError::UnbalancedExpression { remaining: 0 })
        );
    }
}
