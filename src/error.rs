/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// language, a `!` that is not part of `!=`, unterminated strings and integer
/// literals that do not fit.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens at a grammar checkpoint, premature end of input, trailing
/// tokens and literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised during evaluation: values that are
/// not numeric where a number is required, and names outside the variable
/// store.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete interpretation run.
///
/// Every phase aborts on its first error; the umbrella type only records which
/// phase gave up.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
