//! Diagnostic types for the LSS front end
//!
//! One enum per pipeline stage. Diagnostics are ordinary values: every stage
//! returns its best-effort output together with a list of these, and nothing
//! is ever thrown or unwound as control flow.

use thiserror::Error;

/// Lexical diagnostics produced by [`crate::lexer::Scanner`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A raw line terminator appeared before the closing quote of a string
    /// literal. The partial atom is abandoned and no token is emitted for it.
    #[error("unterminated string literal \"{text}\" at line {line}, column {column}")]
    UnterminatedString {
        /// Text accumulated before the line terminator, escapes undecoded
        text: String,
        /// Line of the offending line terminator (1-indexed)
        line: usize,
        /// Column of the offending line terminator (1-indexed)
        column: usize,
    },
}

/// Syntactic diagnostics produced by [`crate::parser::SExprParser`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A `)` appeared where an expression was expected. The token is
    /// discarded and never appears in the output tree.
    #[error("unmatched `)` at line {line}, column {column}")]
    UnmatchedCloseParen {
        /// Line of the stray close paren (1-indexed)
        line: usize,
        /// Column of the stray close paren (1-indexed)
        column: usize,
    },

    /// The token stream ran out before a list was closed. The partial list
    /// built so far is still returned.
    #[error("missing `)` for list opened at line {line}, column {column}")]
    MissingCloseParen {
        /// Line of the opening paren (1-indexed)
        line: usize,
        /// Column of the opening paren (1-indexed)
        column: usize,
    },

    /// Parenthesis nesting exceeded the parser's depth limit. The balanced
    /// sub-tree is skipped and parsing resumes after it.
    #[error("expression nesting exceeds {limit} levels at line {line}, column {column}")]
    NestingTooDeep {
        /// The depth limit that was hit
        limit: usize,
        /// Line of the opening paren that crossed the limit (1-indexed)
        line: usize,
        /// Column of that opening paren (1-indexed)
        column: usize,
    },
}

/// Semantic diagnostics produced by [`crate::analyzer::analyze`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    /// A symbol had no binding anywhere on the active scope chain
    #[error("undefined symbol `{name}` at line {line}, column {column}")]
    UndefinedSymbol {
        /// Source text of the symbol
        name: String,
        /// Line where the symbol appeared (1-indexed)
        line: usize,
        /// Column where the symbol appeared (1-indexed)
        column: usize,
    },

    /// The first element of a call expression bound to a plain value
    #[error("`{text}` at line {line}, column {column} must refer to a function")]
    NotCallable {
        /// Source text of the call-position expression's head
        text: String,
        /// Line of that head (1-indexed, 0 when unlocatable)
        line: usize,
        /// Column of that head (1-indexed, 0 when unlocatable)
        column: usize,
    },

    /// A call expression had no elements at all
    #[error("empty call expression")]
    EmptyCall,
}
