//! # LSS Front End
//!
//! A three-stage front end for the LSS S-expression language: source text is
//! lexed into tokens, tokens are parsed into an expression forest, and the
//! forest is bound against a chain of lexical scopes into a
//! diagnostics-annotated program skeleton. There is no evaluator; what comes
//! out is a resolved namespace plus three independent diagnostic lists.
//!
//! ```text
//! Source Text → Scanner → Tokens → Parser → Expressions → Analyzer → Namespace
//!                  ↓                  ↓                       ↓
//!              LexError          ParseError             SemanticError
//! ```
//!
//! Every stage is total: it never fails, never panics on malformed input,
//! and always returns its best-effort structural output alongside an
//! independent error list. Downstream stages consume that output, embedded
//! placeholders included, so one broken atom never hides the diagnostics
//! behind it.
//!
//! ## Quick Start
//!
//! ```rust
//! use lss::{analyze, builtins, Parser, Scanner};
//!
//! let (tokens, lex_errors) = Scanner::new("(+ 2 3)").scan_tokens();
//! assert!(lex_errors.is_empty());
//!
//! let mut parser = Parser::new(tokens);
//! let (forest, parse_errors) = parser.parse();
//! assert!(parse_errors.is_empty());
//!
//! let (namespace, semantic_errors) = analyze(&forest, builtins::global_namespace());
//! assert!(semantic_errors.is_empty());
//! assert!(namespace.lookup(namespace.root(), "+").is_some());
//! ```
//!
//! ## Error Tolerance
//!
//! Malformed input degrades instead of aborting:
//!
//! ```rust
//! use lss::{Parser, Scanner};
//!
//! let (tokens, _) = Scanner::new("(+ 1 2").scan_tokens();
//! let mut parser = Parser::new(tokens);
//! let (forest, parse_errors) = parser.parse();
//!
//! // The partial list is still there, next to its diagnostic.
//! assert_eq!(forest.len(), 1);
//! assert_eq!(parse_errors.len(), 1);
//! ```
//!
//! ## Extending the Builtin Registry
//!
//! The analyzer resolves symbols against a namespace the *caller* builds;
//! registering a new operator is a pure data change:
//!
//! ```rust
//! use std::sync::Arc;
//! use lss::{analyze, builtins, CompiledObject, Namespace, Parser, Scanner, ScopeId, SemanticError, Value};
//!
//! fn double(args: &[Value]) -> Value {
//!     args[0].clone() // runtime op; opaque to the analyzer
//! }
//!
//! fn bind_twice(
//!     _namespace: &mut Namespace,
//!     _scope: ScopeId,
//!     _errors: &mut Vec<SemanticError>,
//!     _args: &[Arc<CompiledObject>],
//! ) -> Arc<CompiledObject> {
//!     CompiledObject::placeholder()
//! }
//!
//! let mut namespace = builtins::global_namespace();
//! let root = namespace.root();
//! namespace.define(root, "twice", CompiledObject::callable("twice", 1, double, bind_twice));
//!
//! let (tokens, _) = Scanner::new("(twice 3)").scan_tokens();
//! let mut parser = Parser::new(tokens);
//! let (forest, _) = parser.parse();
//! let (_, semantic_errors) = analyze(&forest, namespace);
//! assert!(semantic_errors.is_empty());
//! ```
//!
//! ## Main Components
//!
//! - [`Scanner`] — character-classification state machine producing tokens
//! - [`SExprParser`] — error-tolerant recursive descent over a token cursor
//! - [`analyze`] — bottom-up binder over the lexical scope chain
//! - [`Namespace`] — arena-backed tree of scopes with parent-chain lookup
//! - [`CompiledObject`] — inert value or callable-with-binder

/// Version of the LSS front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analyzer;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use analyzer::{analyze, bind, builtins, Binder, Callable, CompiledObject, Namespace, NativeOp, ScopeId, Value};
pub use error::{LexError, ParseError, SemanticError};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{Expression, SExprParser, MAX_NESTING_DEPTH};

/// Type alias for the S-expression parser.
/// Converts tokens into an expression forest plus diagnostics.
pub type Parser = SExprParser;
