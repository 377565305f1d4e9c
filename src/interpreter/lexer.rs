use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::function::core::FunctionTable,
        parser::ParseResult,
        token::{Operator, Token},
    },
};

/// Represents a raw lexical unit of the input.
///
/// Lexemes carry no meaning beyond their shape: identifiers are not yet
/// resolved against the function table. [`tokenize`] turns them into
/// [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// A maximal run of digits and decimal points, such as `3.14`, `.5` or
    /// `2.`. Runs that do not form a number (`1.2.3`) fail to lex.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// A maximal run of letters, such as `sin` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current lexeme slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the slice holds more than one decimal point or no digits.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression into tokens.
///
/// Whitespace is dropped before scanning, so it may appear anywhere, even
/// inside a number or a function name. The scan is a single left-to-right
/// pass. Every run of letters must name a function of `functions`.
///
/// # Errors
/// - [`ParseError::MalformedNumber`] for runs like `1.2.3`.
/// - [`ParseError::UnknownFunction`] for names missing from `functions`.
/// - [`ParseError::UnknownToken`] for any other character.
///
/// # Example
/// ```
/// use yardcalc::{
///     FunctionTable,
///     interpreter::{lexer::tokenize, token::{Operator, Token}},
/// };
///
/// let table = FunctionTable::standard();
/// let tokens = tokenize("1 + 2.5", &table).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Operator(Operator::Add), Token::Number(2.5)]);
///
/// assert!(tokenize("1 @ 2", &table).is_err());
/// ```
pub fn tokenize(source: &str, functions: &FunctionTable) -> ParseResult<Vec<Token>> {
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&compact);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let slice = lexer.slice();
            if slice.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return Err(ParseError::MalformedNumber { text: slice.to_string() });
            }
            return Err(ParseError::UnknownToken { token: slice.to_string() });
        };

        tokens.push(match lexeme {
                        Lexeme::Number(n) => Token::Number(n),
                        Lexeme::Identifier(name) => match functions.get(&name) {
                            Some(function) => Token::Function(function),
                            None => return Err(ParseError::UnknownFunction { name }),
                        },
                        Lexeme::Plus => Token::Operator(Operator::Add),
                        Lexeme::Minus => Token::Operator(Operator::Sub),
                        Lexeme::Star => Token::Operator(Operator::Mul),
                        Lexeme::Slash => Token::Operator(Operator::Div),
                        Lexeme::Caret => Token::Operator(Operator::Pow),
                        Lexeme::LParen => Token::LeftParen,
                        Lexeme::RParen => Token::RightParen,
                    });
    }

    Ok(tokens)
}
