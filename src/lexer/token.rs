use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token, carrying the decoded value for literal atoms
    pub kind: TokenKind,
    /// Original text of the token (string lexemes keep their quotes and
    /// undecoded escapes)
    pub lexeme: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
    /// Column number of the token's *last* character (1-indexed); a
    /// single-character token sits at its own column
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }

    /// Returns true if this token is a symbol atom
    pub fn is_symbol(&self) -> bool {
        matches!(self.kind, TokenKind::Symbol(_))
    }
}

/// All token kinds of the LSS language
///
/// Every token other than the two parens is an atom. The five atom kinds are
/// the ones the language definition prescribes: booleans, integers, floats,
/// strings, and symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis `(`
    LeftParen,
    /// Right parenthesis `)`
    RightParen,
    /// Integer literal, arbitrary precision, leading zeros normalized
    Int(BigInt),
    /// Floating-point literal
    Float(f64),
    /// Boolean literal (`true` / `false`)
    Bool(bool),
    /// String literal with escape sequences decoded
    Str(String),
    /// Bare symbol
    Symbol(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Int(n) => write!(f, "{}", n),
            TokenKind::Float(fl) => write!(f, "{}", fl),
            TokenKind::Bool(b) => write!(f, "{}", b),
            TokenKind::Str(s) => write!(f, "\"{}\"", s),
            TokenKind::Symbol(s) => write!(f, "{}", s),
        }
    }
}
