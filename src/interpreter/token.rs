use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::function::core::Function};

/// Precedence of function application; binds tighter than every operator.
pub const FUNCTION_PRECEDENCE: u8 = 4;

/// A unit of an expression after tokenizing.
///
/// Tokens are produced once by the tokenizer and never modified. The same type
/// is used for the infix token list and for the postfix output queue; the
/// queue simply never contains parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `3`, `2.5` or `.5`.
    Number(f64),
    /// One of the binary operators `+ - * / ^`.
    Operator(Operator),
    /// A named unary function resolved from the function table.
    Function(Function),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Grouping of a chain of operators with equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

impl Operator {
    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// `+ -` are 1, `* /` are 2 and `^` is 3. Function application sits above
    /// all of them at [`FUNCTION_PRECEDENCE`].
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// `^` is right-associative, everything else left-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operator to two plain numbers as `a op b`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for `/` with a zero divisor.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{error::RuntimeError, interpreter::token::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(3.0, 2.0), Ok(1.0));
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(a / b)
            },
            Self::Pow => Ok(a.powf(b)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(function) => write!(f, "{}", function.name),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence separated by single spaces, e.g. a postfix queue
/// as `2 3 4 * +`.
///
/// # Example
/// ```
/// use yardcalc::interpreter::token::{Operator, Token, render};
///
/// let queue = [Token::Number(2.0), Token::Number(0.5), Token::Operator(Operator::Mul)];
/// assert_eq!(render(&queue), "2 0.5 *");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
