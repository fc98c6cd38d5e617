use std::{fmt, rc::Rc};

/// A bare name as it appears in source code.
///
/// Identifiers name bindings, call targets and function parameters. Infix
/// operators are also represented as identifiers once parsed, so `a + b`
/// becomes a call of the identifier `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A brace-delimited sequence of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Nodes inside the braces, in source order.
    pub body: Vec<Node>,
}

/// One `condition { body }` arm of a [`Node::Conditional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Evaluated to decide whether this arm runs.
    pub condition: Node,
    /// Evaluated when the condition is truthy.
    pub body:      Block,
}

/// An expression-tree node produced by the parser.
///
/// The set of variants is closed; the evaluator matches on it exhaustively.
/// Once parsing succeeds the tree is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Integer literal text, such as `42`.
    NumberLiteral(String),
    /// String literal contents, without the surrounding quotes.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(String),
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// Call of a named callable, including every infix operator.
    Call {
        /// The name being called.
        callee: Identifier,
        /// Arguments, evaluated left to right.
        args:   Vec<Node>,
    },
    /// `(a, b) { ... }`
    FunctionLiteral {
        /// Positional parameter names.
        params: Vec<Identifier>,
        /// The body, shared with every closure created from this literal.
        body:   Rc<[Node]>,
    },
    /// `{ ... }` in expression position.
    Block(Block),
    /// `if`/`unless` with optional `else`.
    ///
    /// `unless` is desugared at parse time by swapping bodies, so a single
    /// branch list plus default body represents both forms.
    Conditional {
        /// Arms tried in declared order.
        branches:  Vec<Branch>,
        /// Evaluated when no arm's condition is truthy.
        else_body: Option<Block>,
    },
    /// `use name`: a request for the module resolver.
    Use(String),
    /// `import name`: merge the bindings of block `name` into the current
    /// scope.
    Import(String),
}

impl Node {
    /// Builds the call node that an infix operator parses into.
    pub fn infix(op: impl Into<String>, lhs: Self, rhs: Self) -> Self {
        Self::Call { callee: Identifier::new(op),
                     args:   vec![lhs, rhs], }
    }
}

/// Renders a node back to a compact source-like form.
///
/// Used by `--tree`. Infix calls are printed fully parenthesised so the
/// grouping chosen by the parser is visible.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral(text) | Self::BooleanLiteral(text) => f.write_str(text),
            Self::StringLiteral(text) => write!(f, "\"{text}\""),
            Self::Identifier(id) => write!(f, "{id}"),
            Self::Call { callee, args } if args.len() == 2 && is_operator(&callee.name) => {
                write!(f, "({} {} {})", args[0], callee, args[1])
            },
            Self::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_separated(f, args, ", ")?;
                f.write_str(")")
            },
            Self::FunctionLiteral { params, body } => {
                f.write_str("(")?;
                write_separated(f, params, ", ")?;
                f.write_str(") ")?;
                write_body(f, body)
            },
            Self::Block(block) => write_body(f, &block.body),
            Self::Conditional { branches, else_body } => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" else ")?;
                    }
                    write!(f, "if {} ", branch.condition)?;
                    write_body(f, &branch.body.body)?;
                }
                if let Some(else_body) = else_body {
                    f.write_str(" else ")?;
                    write_body(f, &else_body.body)?;
                }
                Ok(())
            },
            Self::Use(name) => write!(f, "use {name}"),
            Self::Import(name) => write!(f, "import {name}"),
        }
    }
}

fn is_operator(name: &str) -> bool {
    matches!(name, "." | "=" | "|>" | "*" | "/" | "+" | "-" | "eq" | "and" | "or")
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                    items: &[T],
                                    separator: &str)
                                    -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &[Node]) -> fmt::Result {
    if body.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    write_separated(f, body, "; ")?;
    f.write_str(" }")
}
