/// Represents all errors that can occur during parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// A function literal's parameter list contained something other than an
    /// identifier.
    #[error("Error on line {line}: Expected identifier in parameter list, found {found}.")]
    InvalidParameter {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `{` was never matched by a `}`.
    #[error("Error on line {line}: End of input reached before block closed.")]
    UnterminatedBlock {
        /// The line of the opening brace.
        line: usize,
    },
}
