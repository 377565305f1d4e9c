use tracing::{debug, trace};

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{binary::combine, function::core::FunctionTable},
        lexer::tokenize,
        parser::{ParseResult, to_postfix},
        token::{Token, render},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All reduction steps return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates expressions against a borrowed function table.
///
/// ## Usage
///
/// An `Evaluator` holds nothing but a reference to its [`FunctionTable`], so
/// it is cheap to create and can be shared between threads. Every call to
/// [`Evaluator::evaluate`] builds its own token list, stacks and output queue
/// and drops them before returning.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'t> {
    functions: &'t FunctionTable,
}

impl<'t> Evaluator<'t> {
    /// Creates an evaluator that resolves function names in `functions`.
    #[must_use]
    pub const fn new(functions: &'t FunctionTable) -> Self {
        Self { functions }
    }

    /// Returns the function table names are resolved against.
    #[must_use]
    pub const fn functions(&self) -> &'t FunctionTable {
        self.functions
    }

    /// Evaluates one expression to a number.
    ///
    /// The expression is tokenized, converted to postfix order and reduced.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if tokenizing or shunting fails and
    /// [`Error::Runtime`] if the reduction fails.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{Evaluator, FunctionTable};
    ///
    /// let table = FunctionTable::standard();
    /// let evaluator = Evaluator::new(&table);
    ///
    /// assert_eq!(evaluator.evaluate("2 * 3 + 4 * 5").unwrap(), 26.0);
    /// assert!(evaluator.evaluate("foo(1)").is_err());
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<f64, Error> {
        let postfix = self.postfix(source)?;
        let result = reduce(&postfix)?;
        debug!(expression = source, result, "evaluated");
        Ok(result)
    }

    /// Tokenizes an expression and converts it to postfix order without
    /// reducing it.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for unknown tokens or functions, malformed
    /// numbers and mismatched parentheses.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{Evaluator, FunctionTable, interpreter::token::render};
    ///
    /// let table = FunctionTable::standard();
    /// let postfix = Evaluator::new(&table).postfix("sin(0) + 1").unwrap();
    ///
    /// assert_eq!(render(&postfix), "0 sin 1 +");
    /// ```
    pub fn postfix(&self, source: &str) -> ParseResult<Vec<Token>> {
        let tokens = tokenize(source, self.functions)?;
        trace!(tokens = %render(&tokens), "tokenized");

        let postfix = to_postfix(tokens)?;
        trace!(postfix = %render(&postfix), "converted to postfix");
        Ok(postfix)
    }
}

/// Reduces a postfix queue to a single number.
///
/// Numbers are pushed onto the evaluation stack; a function replaces the top
/// value with its result; an operator pops `b` then `a` and pushes `a op b`
/// (see [`combine`] for how divisions are deferred). When the queue is
/// exhausted exactly one value must remain, and it is resolved to a plain
/// number.
///
/// # Errors
/// - [`RuntimeError::NotEnoughArguments`] / [`RuntimeError::NotEnoughOperands`]
///   if the stack runs dry.
/// - [`RuntimeError::EmptyExpression`] / [`RuntimeError::DanglingValues`] if
///   the queue does not leave exactly one value.
/// - [`ParseError::MismatchedParentheses`] if the queue holds a parenthesis.
/// - Any error raised by an operator or function.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{
///     evaluator::core::reduce,
///     token::{Operator, Token},
/// };
///
/// let queue = [Token::Number(3.0), Token::Number(2.0), Token::Operator(Operator::Sub)];
/// assert_eq!(reduce(&queue).unwrap(), 1.0);
///
/// assert!(reduce(&[Token::Operator(Operator::Sub)]).is_err());
/// ```
pub fn reduce(postfix: &[Token]) -> Result<f64, Error> {
    let mut stack: Vec<Value> = Vec::new();

    for token in postfix {
        match *token {
            Token::Number(n) => stack.push(Value::Plain(n)),
            Token::Function(function) => {
                let argument =
                    stack.pop()
                         .ok_or(RuntimeError::NotEnoughArguments { function: function.name })?;
                stack.push(Value::Plain(function.apply(argument.resolve())?));
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::NotEnoughOperands { operator: op.symbol() }.into());
                };
                stack.push(combine(op, left, right)?);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(ParseError::MismatchedParentheses.into());
            },
        }
    }

    let result = stack.pop().ok_or(RuntimeError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(RuntimeError::DanglingValues { count: stack.len() + 1 }.into());
    }
    Ok(result.resolve())
}
