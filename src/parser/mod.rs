//! Syntactic analysis for LSS
//!
//! Converts the token stream into a forest of top-level expressions plus a
//! list of syntactic diagnostics. Malformed bracketing degrades into partial
//! trees; the parser never fails.

mod expr;
mod sexpr_parser;

pub use expr::Expression;
pub use sexpr_parser::{SExprParser, MAX_NESTING_DEPTH};
