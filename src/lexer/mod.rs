//! Lexical analysis for LSS
//!
//! Converts source text into a stream of located tokens plus a list of
//! lexical diagnostics. The scanner never fails; malformed input yields
//! fewer tokens and more diagnostics.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
