/// Lexing errors.
///
/// Raised when no token rule matches the remaining source text.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into nodes:
/// unexpected or missing tokens, malformed parameter lists and unterminated
/// blocks.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown identifiers, redefinitions, arity mismatches and bad operands.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a unit of source text.
///
/// Lex and parse errors abort the unit before anything is evaluated; runtime
/// errors abort evaluation midway. `Module` is reported by module resolvers
/// that cannot load a `use`d module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("failed to load module '{name}': {reason}")]
    Module { name: String, reason: String },
}

impl Error {
    /// Whether the failure happened before evaluation started.
    ///
    /// The interactive prompt uses this to decide whether more input might
    /// complete the unit.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Parse(_))
    }
}
