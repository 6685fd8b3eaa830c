use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::Token;

/// A parsed expression: a single atom or an ordered list of expressions
///
/// Expressions form a tree owned top-down. Nodes are never mutated after
/// construction; the analyzer only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A single classified token
    Atom(Token),
    /// An ordered sequence of sub-expressions, in source order
    List(Vec<Expression>),
}

impl Expression {
    /// Returns true if this expression is a single atom
    pub fn is_atom(&self) -> bool {
        matches!(self, Expression::Atom(_))
    }

    /// Returns true if this expression is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Expression::List(_))
    }

    /// Returns the token of the leftmost atom, descending through nested
    /// lists. Used to locate diagnostics for list expressions.
    pub fn head_token(&self) -> Option<&Token> {
        match self {
            Expression::Atom(token) => Some(token),
            Expression::List(elements) => elements.first().and_then(Expression::head_token),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Atom(token) => write!(f, "{}", token.lexeme),
            Expression::List(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
        }
    }
}
