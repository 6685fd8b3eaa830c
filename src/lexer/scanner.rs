use num_bigint::BigInt;

use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Lexer state: outside any atom, inside a bare atom, or inside a quoted
/// string
#[derive(Clone, Copy)]
enum State {
    Scanning,
    InAtom,
    InString,
}

/// Character-level scanner for LSS source text
///
/// The scanner is total: it consumes the whole character stream and returns
/// every token it could form plus a list of lexical diagnostics. Malformed
/// input degrades into fewer tokens and more diagnostics, never a failure.
pub struct Scanner {
    /// Source characters paired with their 1-indexed line and column
    chars: Vec<(char, usize, usize)>,
    /// Accumulated tokens, in source order
    tokens: Vec<Token>,
    /// Accumulated diagnostics, in discovery order
    errors: Vec<LexError>,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        let mut chars = Vec::new();
        let mut line = 1;
        let mut column = 1;
        for ch in source.chars() {
            chars.push((ch, line, column));
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        // One conceptual trailing line terminator, so a trailing atom or an
        // unterminated string at end of input is still flushed.
        if let Some(&(_, last_line, last_column)) = chars.last() {
            chars.push(('\n', last_line, last_column + 1));
        }

        Scanner {
            chars,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans all tokens from the source and returns them together with the
    /// lexical diagnostics
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<LexError>) {
        tracing::debug!(chars = self.chars.len(), "scanning source text");

        let chars = std::mem::take(&mut self.chars);
        let mut state = State::Scanning;
        let mut buffer = String::new();

        for &(ch, line, column) in &chars {
            match state {
                State::Scanning => match ch {
                    '(' => self.push_paren(TokenKind::LeftParen, line, column),
                    ')' => self.push_paren(TokenKind::RightParen, line, column),
                    '"' => state = State::InString,
                    c if c.is_whitespace() => {}
                    c => {
                        buffer.push(c);
                        state = State::InAtom;
                    }
                },

                State::InString => match ch {
                    '"' => {
                        // Escapes are decoded only here, at finalize time;
                        // the lexeme keeps the raw spelling with quotes.
                        let lexeme = format!("\"{}\"", buffer);
                        let value = decode_escapes(&buffer);
                        self.tokens
                            .push(Token::new(TokenKind::Str(value), lexeme, line, column));
                        buffer.clear();
                        state = State::Scanning;
                    }
                    '\n' => {
                        // The closing quote must come before the line ends.
                        // The atom is abandoned: no token, one diagnostic.
                        self.errors.push(LexError::UnterminatedString {
                            text: std::mem::take(&mut buffer),
                            line,
                            column,
                        });
                        state = State::Scanning;
                    }
                    c => buffer.push(c),
                },

                State::InAtom => match ch {
                    '(' | ')' => {
                        // The atom ends one column before its terminator,
                        // which is then a token of its own.
                        self.flush_atom(&mut buffer, line, column - 1);
                        let kind = if ch == '(' {
                            TokenKind::LeftParen
                        } else {
                            TokenKind::RightParen
                        };
                        self.push_paren(kind, line, column);
                        state = State::Scanning;
                    }
                    c if c.is_whitespace() => {
                        self.flush_atom(&mut buffer, line, column - 1);
                        state = State::Scanning;
                    }
                    c => buffer.push(c),
                },
            }
        }

        (self.tokens, self.errors)
    }

    fn push_paren(&mut self, kind: TokenKind, line: usize, column: usize) {
        let lexeme = kind.to_string();
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }

    fn flush_atom(&mut self, buffer: &mut String, line: usize, column: usize) {
        let text = std::mem::take(buffer);
        let kind = classify_atom(&text);
        self.tokens.push(Token::new(kind, text, line, column));
    }
}

/// Classifies a finished bare atom
///
/// The precedence bool > int > float > symbol is load-bearing: it is why
/// `1.2.3` is a symbol rather than a malformed number, and must be checked
/// in exactly this order.
fn classify_atom(text: &str) -> TokenKind {
    if text == "true" {
        TokenKind::Bool(true)
    } else if text == "false" {
        TokenKind::Bool(false)
    } else if is_int(text) {
        match text.parse::<BigInt>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => TokenKind::Symbol(text.to_string()),
        }
    } else if is_float(text) {
        match text.parse::<f64>() {
            Ok(value) => TokenKind::Float(value),
            Err(_) => TokenKind::Symbol(text.to_string()),
        }
    } else {
        TokenKind::Symbol(text.to_string())
    }
}

/// Optional leading `-`, then one or more ASCII digits. A bare `-` is not an
/// integer.
fn is_int(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Optional leading `-`, then exactly one `.` and otherwise one or more
/// ASCII digits. `.45` and `1.` are floats; `.` and `-.` are not.
fn is_float(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    if body.matches('.').count() != 1 {
        return false;
    }
    let digits: String = body.chars().filter(|&c| c != '.').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Decodes standard escape sequences in a raw string-literal body. Unknown
/// escapes are kept verbatim; the lexer stays total.
fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('0') => out.push('\0'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
