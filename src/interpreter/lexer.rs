use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Several rules can match overlapping prefixes of the input. logos resolves
/// them by longest match first and rule priority second, so the literal
/// keyword and word-operator rules (`if`, `use`, `and`, `eq`, ...) win over the
/// identifier catch-all whenever both match the same text, while `order` or
/// `iffy` still lex as identifiers.
///
/// Whitespace, newlines and `#` comments are consumed but never emitted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `# comment to end of line`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    BracketOpen,
    /// `)`
    #[token(")")]
    BracketClose,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    EndStatement,
    /// `use`
    #[token("use")]
    Use,
    /// `import`
    #[token("import")]
    Import,
    /// `if`
    #[token("if")]
    If,
    /// `unless`
    #[token("unless")]
    Unless,
    /// `else`
    #[token("else")]
    Else,
    /// Symbolic and word operators written between two operands.
    #[token(".")]
    #[token("=")]
    #[token("|>")]
    #[token("*")]
    #[token("/")]
    #[token("+")]
    #[token("-")]
    #[token("eq")]
    #[token("and")]
    #[token("or")]
    InfixOperator,
    /// `{`
    #[token("{")]
    BlockOpen,
    /// `}`
    #[token("}")]
    BlockClose,
    /// Double-quoted string without escapes; may span lines.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    }, allow_greedy = true)]
    String,
    /// Unsigned integer literal.
    #[regex(r"[0-9]+")]
    Number,
    /// `true` or `false`
    #[token("true")]
    #[token("false")]
    Boolean,
    /// Anything else that is not punctuation, whitespace or a quote, such as
    /// `x`, `start!` or `HTTPServer`. Digits are allowed after the first
    /// character.
    #[regex(r#"[^#(),;+\-*/.=|>{}"0-9\s\[\]][^#(),;+\-*/.=|>{}"\s\[\]]*"#, allow_greedy = true)]
    Identifier,
    /// Line breaks; counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Space,
}

impl TokenKind {
    /// Whether tokens of this kind keep their matched text.
    const fn carries_text(self) -> bool {
        matches!(self,
                 Self::InfixOperator
                 | Self::String
                 | Self::Number
                 | Self::Boolean
                 | Self::Identifier)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::BracketOpen => "bracket_open",
            Self::BracketClose => "bracket_close",
            Self::Comma => "comma",
            Self::EndStatement => "end_statement",
            Self::Use => "use",
            Self::Import => "import",
            Self::If => "if",
            Self::Unless => "unless",
            Self::Else => "else",
            Self::InfixOperator => "infix_operator",
            Self::BlockOpen => "block_open",
            Self::BlockClose => "block_close",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Identifier => "identifier",
            Self::NewLine => "new_line",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A lexical token: its kind, its text where the kind needs one, and the
/// line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched text for operators, literals and identifiers. String literals
    /// keep only their contents.
    pub text: Option<String>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: Option<&str>, line: usize) -> Self {
        Self { kind,
               text: text.map(str::to_string),
               line }
    }

    /// The token's text, or the empty string for punctuation and keywords.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}({text})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Turns source text into an ordered list of tokens.
///
/// # Errors
/// Returns [`LexError::UnrecognizedInput`] carrying the unconsumed remainder
/// when no rule matches at the current position.
///
/// # Example
/// ```
/// use fnscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("3 + 4").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::InfixOperator, TokenKind::Number]);
/// assert_eq!(tokens[1].text(), "+");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Multi-line strings have already advanced the counter past their end.
        let line = lexer.extras.line.saturating_sub(lexer.slice().matches('\n').count());
        let Ok(kind) = result else {
            return Err(LexError::UnrecognizedInput { remainder: source[lexer.span().start..].to_string(),
                                                     line });
        };

        let text = kind.carries_text().then(|| {
                                          let slice = lexer.slice();
                                          if kind == TokenKind::String {
                                              slice[1..slice.len() - 1].to_string()
                                          } else {
                                              slice.to_string()
                                          }
                                      });
        tokens.push(Token { kind, text, line });
    }

    trace!("tokenized {} tokens over {} lines", tokens.len(), lexer.extras.line);
    Ok(tokens)
}
