/// Represents all errors that can occur during evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to use a name that is not bound in any visible scope.
    #[error("Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
    },
    /// Tried to bind a name that already exists in the same scope.
    #[error("Cannot redefine '{name}'.")]
    Redefinition {
        /// The name of the binding.
        name: String,
    },
    /// Called a value that has no call behaviour.
    #[error("'{name}' is not a function.")]
    NotCallable {
        /// The callee name.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("'{name}' expected {expected} arguments, got {found}.")]
    ArityMismatch {
        /// The callee name.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The left side of `.` was not a block.
    #[error("Cannot dereference a {found}; only blocks have members.")]
    NonBlockDereference {
        /// Type name of the value that was dereferenced.
        found: String,
    },
    /// The right side of `.` was neither a member name nor a member call.
    #[error("Only a member name or a member call may follow '.'.")]
    InvalidMemberAccess,
    /// `import` named something that is not a block.
    #[error("Cannot import '{name}': it is a {found}, not a block.")]
    NonBlockImport {
        /// The imported name.
        name:  String,
        /// Type name of the bound value.
        found: String,
    },
    /// The left side of `=` was not a plain identifier.
    #[error("Can only assign to an identifier.")]
    InvalidAssignmentTarget,
    /// An expression that must produce a value produced none.
    #[error("Expression produced no value.")]
    MissingValue,
    /// An operand had the wrong type for a builtin.
    #[error("Type error in '{operation}': {details}.")]
    TypeError {
        /// The builtin that rejected the operand.
        operation: String,
        /// Details about the type mismatch.
        details:   String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Integer arithmetic overflowed.
    #[error("Integer overflow in '{operation}'.")]
    Overflow {
        /// The builtin that overflowed.
        operation: String,
    },
    /// A number literal does not fit in a 64 bit integer.
    #[error("Literal '{text}' is too large.")]
    LiteralTooLarge {
        /// The literal text.
        text: String,
    },
    /// `assert` received a falsy value.
    #[error("Assertion failed.")]
    AssertionFailed,
}
