//! Semantic analysis (binding) for LSS
//!
//! Bottom-up converts every parsed expression into a [`CompiledObject`],
//! resolving symbols against a chain of lexical scopes. The analyzer is
//! total: failures become diagnostics plus error placeholders, and binding
//! always continues.

pub mod builtins;
mod namespace;
mod object;

pub use namespace::{Namespace, ScopeId};
pub use object::{Binder, Callable, CompiledObject, NativeOp, Value};

use std::sync::Arc;

use crate::error::SemanticError;
use crate::lexer::TokenKind;
use crate::parser::Expression;

/// Binds a whole top-level forest against a pre-seeded root namespace
///
/// Returns the (possibly grown) namespace together with every semantic
/// diagnostic, in discovery order. The caller constructs the namespace, see
/// [`builtins::global_namespace`].
pub fn analyze(
    forest: &[Expression],
    mut namespace: Namespace,
) -> (Namespace, Vec<SemanticError>) {
    tracing::debug!(expressions = forest.len(), "binding program");

    let mut errors = Vec::new();
    let root = namespace.root();
    for expr in forest {
        bind(expr, &mut namespace, root, &mut errors);
    }
    (namespace, errors)
}

/// Binds one expression in the given scope, left-to-right and depth-first,
/// appending diagnostics as it goes
pub fn bind(
    expr: &Expression,
    namespace: &mut Namespace,
    scope: ScopeId,
    errors: &mut Vec<SemanticError>,
) -> Arc<CompiledObject> {
    match expr {
        Expression::Atom(token) => match &token.kind {
            TokenKind::Symbol(name) => match namespace.lookup(scope, name) {
                Some(object) => object,
                None => {
                    errors.push(SemanticError::UndefinedSymbol {
                        name: name.clone(),
                        line: token.line,
                        column: token.column,
                    });
                    CompiledObject::placeholder()
                }
            },
            TokenKind::Bool(b) => CompiledObject::value(Value::Bool(*b)),
            TokenKind::Int(n) => CompiledObject::value(Value::Int(n.clone())),
            TokenKind::Float(f) => CompiledObject::value(Value::Float(*f)),
            TokenKind::Str(s) => CompiledObject::value(Value::Str(s.clone())),
            // The parser never puts parens into atoms; kept for totality.
            TokenKind::LeftParen | TokenKind::RightParen => {
                CompiledObject::value(Value::Symbol(token.lexeme.clone()))
            }
        },

        Expression::List(elements) => {
            // Source order determines the order of reported diagnostics.
            let bound: Vec<Arc<CompiledObject>> = elements
                .iter()
                .map(|element| bind(element, namespace, scope, errors))
                .collect();

            let Some(first) = bound.first() else {
                errors.push(SemanticError::EmptyCall);
                return CompiledObject::placeholder();
            };

            match first.as_ref() {
                CompiledObject::Callable(callee) => {
                    let callee = callee.clone();
                    callee.bind(namespace, scope, errors, &bound[1..])
                }
                CompiledObject::Value(_) => {
                    let head = elements[0].head_token();
                    errors.push(SemanticError::NotCallable {
                        text: head
                            .map(|t| t.lexeme.clone())
                            .unwrap_or_else(|| elements[0].to_string()),
                        line: head.map_or(0, |t| t.line),
                        column: head.map_or(0, |t| t.column),
                    });
                    CompiledObject::placeholder()
                }
            }
        }
    }
}
