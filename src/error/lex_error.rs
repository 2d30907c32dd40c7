use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `!` that is not followed by `=`.
    #[error("Error on line {line}: Expected '=' after '!'.")]
    ExpectedEqualsAfterBang {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal without its closing `"`.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal outside the `i64` range.
    #[error("Error on line {line}: Integer literal {literal} is too large.")]
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::ExpectedEqualsAfterBang { line }
            | Self::UnterminatedString { line }
            | Self::IntegerTooLarge { line, .. } => *line,
        }
    }
}
