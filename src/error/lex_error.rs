/// Represents a failure to tokenize source text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token rule matched at the current position.
    #[error("Error on line {line}: Failed to tokenise: {remainder}")]
    UnrecognizedInput {
        /// The unconsumed source text, starting at the offending character.
        remainder: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}
