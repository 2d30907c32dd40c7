use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Division and modulo by zero are deliberately absent: they follow IEEE-754
/// and produce infinities or NaN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A value had a type that cannot be used as a number.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A variable name outside the single-letter store.
    #[error("Error on line {line}: Invalid variable name '{name}', expected a single letter A-Z.")]
    NameError {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeError { line, .. } | Self::NameError { line, .. } => *line,
        }
    }
}
