use crate::{
    error::ParseError,
    interpreter::token::{Associativity, FUNCTION_PRECEDENCE, Operator, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts infix tokens to postfix order with the Shunting-Yard algorithm.
///
/// Operators, functions and `(` wait on an operator stack; numbers go straight
/// to the output queue. An incoming operator first pops every stacked
/// operator or function that binds tighter, or equally tight when the
/// incoming operator is left-associative. Functions bind tightest of all, so
/// `sin(0)+1` applies `sin` before adding.
///
/// A `+` or `-` that opens the expression or directly follows `(` is a sign:
/// an implicit `0` is emitted as its left operand, so `-(5*6)` reduces as
/// `0 - (5*6)`. A sign anywhere else is an ordinary binary operator.
///
/// # Errors
/// Returns [`ParseError::MismatchedParentheses`] for a `)` with no open `(`
/// or a `(` that is never closed.
///
/// # Example
/// ```
/// use yardcalc::{
///     FunctionTable,
///     interpreter::{lexer::tokenize, parser::to_postfix, token::render},
/// };
///
/// let table = FunctionTable::standard();
///
/// let postfix = to_postfix(tokenize("2+3*4", &table).unwrap()).unwrap();
/// assert_eq!(render(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(tokenize("2^3^2", &table).unwrap()).unwrap();
/// assert_eq!(render(&postfix), "2 3 2 ^ ^");
///
/// let postfix = to_postfix(tokenize("-(1)", &table).unwrap()).unwrap();
/// assert_eq!(render(&postfix), "0 1 -");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut previous: Option<Token> = None;

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::LeftParen => stack.push(token),
            Token::Operator(op) => {
                if matches!(op, Operator::Add | Operator::Sub)
                   && matches!(previous, None | Some(Token::LeftParen))
                {
                    output.push(Token::Number(0.0));
                }

                while let Some(top) = stack.last()
                      && yields_to(top, op)
                {
                    output.extend(stack.pop());
                }
                stack.push(token);
            },
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                }
                if let Some(Token::Function(_)) = stack.last() {
                    output.extend(stack.pop());
                }
            },
        }
        previous = Some(token);
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LeftParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

/// Whether the stacked `top` must move to the output before `incoming` is
/// pushed.
fn yields_to(top: &Token, incoming: Operator) -> bool {
    let top_precedence = match top {
        Token::Operator(op) => op.precedence(),
        Token::Function(_) => FUNCTION_PRECEDENCE,
        _ => return false,
    };

    top_precedence > incoming.precedence()
    || (top_precedence == incoming.precedence()
        && incoming.associativity() == Associativity::Left)
}
