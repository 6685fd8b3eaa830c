use super::expr::Expression;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

/// Maximum parenthesis nesting the parser will descend into. Nesting beyond
/// this yields [`ParseError::NestingTooDeep`] instead of exhausting the call
/// stack on hostile input.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Error-tolerant recursive-descent parser over a token cursor
///
/// The parser is total: bad bracketing degrades into partial trees plus
/// diagnostics, and parsing always resumes with the remaining tokens.
pub struct SExprParser {
    tokens: Vec<Token>,
    current: usize,
}

impl SExprParser {
    /// Creates a new parser over a token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens, current: 0 }
    }

    /// Parses the whole token sequence into a forest of top-level
    /// expressions plus the syntactic diagnostics, both in source order
    pub fn parse(&mut self) -> (Vec<Expression>, Vec<ParseError>) {
        tracing::debug!(tokens = self.tokens.len(), "parsing token stream");

        let mut forest = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            match self.parse_expression(0, &mut errors) {
                // A top-level `()` produces no forest entry.
                Some(Expression::List(elements)) if elements.is_empty() => {}
                Some(expr) => forest.push(expr),
                None => {}
            }
        }

        (forest, errors)
    }

    /// Parses one expression. Returns `None` when the leading token had to
    /// be discarded (stray `)`, over-deep nesting).
    fn parse_expression(
        &mut self,
        depth: usize,
        errors: &mut Vec<ParseError>,
    ) -> Option<Expression> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::RightParen => {
                // No matching `(` before this; discard and resume.
                errors.push(ParseError::UnmatchedCloseParen {
                    line: token.line,
                    column: token.column,
                });
                None
            }

            TokenKind::LeftParen => {
                if depth >= MAX_NESTING_DEPTH {
                    errors.push(ParseError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                        line: token.line,
                        column: token.column,
                    });
                    self.skip_balanced();
                    return None;
                }

                let mut elements = Vec::new();
                while !self.is_at_end() && !self.check_close_paren() {
                    if let Some(element) = self.parse_expression(depth + 1, errors) {
                        elements.push(element);
                    }
                }

                if self.is_at_end() {
                    // Ran out of tokens; the partial list is still returned.
                    errors.push(ParseError::MissingCloseParen {
                        line: token.line,
                        column: token.column,
                    });
                } else {
                    self.current += 1; // matching `)`
                }

                Some(Expression::List(elements))
            }

            _ => Some(Expression::Atom(token)),
        }
    }

    /// Skips tokens until the list opened just before this call is balanced
    /// again, or the stream is exhausted
    fn skip_balanced(&mut self) {
        let mut open = 1usize;
        while open > 0 {
            match self.advance() {
                Some(token) => match token.kind {
                    TokenKind::LeftParen => open += 1,
                    TokenKind::RightParen => open -= 1,
                    _ => {}
                },
                None => break,
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn check_close_paren(&self) -> bool {
        matches!(
            self.tokens.get(self.current),
            Some(token) if token.kind == TokenKind::RightParen
        )
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned()?;
        self.current += 1;
        Some(token)
    }
}
