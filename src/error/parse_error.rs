#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during tokenizing or shunting.
pub enum ParseError {
    /// Found a character that starts no known token.
    #[error("Unknown token: '{token}'.")]
    UnknownToken {
        /// The offending text.
        token: String,
    },
    /// A run of letters did not name any function in the table.
    #[error("Unknown function: '{name}'.")]
    UnknownFunction {
        /// The unrecognized name.
        name: String,
    },
    /// A run of digits and decimal points that is not a valid number, such as
    /// `1.2.3` or a lone `.`.
    #[error("Malformed number: '{text}'.")]
    MalformedNumber {
        /// The offending text.
        text: String,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("Mismatched parentheses.")]
    MismatchedParentheses,
}
