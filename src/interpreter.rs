/// The evaluator module reduces postfix queues to numbers.
///
/// It owns the function table, the arithmetic of the binary operators and
/// the [`evaluator::core::Evaluator`] that ties all phases together.
///
/// # Responsibilities
/// - Reduces postfix queues with an evaluation stack.
/// - Defers multiplicative operations until an additive operator forces them.
/// - Reports arity, domain and arithmetic failures.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression and produces tokens: numbers,
/// operators, parentheses and functions resolved against a function table.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Drops whitespace and splits the input into lexemes.
/// - Resolves function names.
/// - Reports unknown characters, unknown names and malformed numbers.
pub mod lexer;
/// The parser module reorders tokens into postfix order.
///
/// Implements the Shunting-Yard algorithm, honouring precedence,
/// associativity, function application and the unary sign rule.
pub mod parser;
/// The token module defines what the lexer produces and the parser consumes.
///
/// Declares [`token::Token`] and the [`token::Operator`] descriptors:
/// precedence, associativity and the plain arithmetic of each operator.
pub mod token;
/// The value module defines what lives on the evaluation stack.
///
/// A value is either a plain number or a deferred term.
pub mod value;
