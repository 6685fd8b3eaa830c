//! Builtin registry construction
//!
//! The analyzer never builds its own symbol table: a collaborator seeds a
//! root namespace with `(name, arity, native op, binder)` registrations and
//! passes it to [`crate::analyzer::analyze`]. Adding an operator means adding
//! a registration here; the analyzer itself never changes.

use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::namespace::{Namespace, ScopeId};
use super::object::{CompiledObject, Value};
use crate::error::SemanticError;

/// Builds a root namespace pre-seeded with every shipped builtin
pub fn global_namespace() -> Namespace {
    let mut namespace = Namespace::new("global");
    register_builtins(&mut namespace);
    namespace
}

/// Registers all shipped builtins into the root scope of `namespace`
pub fn register_builtins(namespace: &mut Namespace) {
    let root = namespace.root();
    namespace.define(root, "+", CompiledObject::callable("+", 2, add, bind_unchecked));
}

/// Numeric addition: exact while every operand is an integer, promoted to
/// float as soon as one operand is. Non-numeric operands are ignored.
fn add(args: &[Value]) -> Value {
    let mut int_sum = BigInt::from(0);
    let mut float_sum = 0.0;
    let mut saw_float = false;

    for arg in args {
        match arg {
            Value::Int(n) => int_sum += n,
            Value::Float(f) => {
                saw_float = true;
                float_sum += f;
            }
            _ => {}
        }
    }

    if saw_float {
        Value::Float(float_sum + int_sum.to_f64().unwrap_or(f64::NAN))
    } else {
        Value::Int(int_sum)
    }
}

/// The minimum contract a binder must satisfy: no static arity or type
/// checking, always succeeds with an opaque result. Richer builtins may
/// inspect `args` and append their own diagnostics instead.
fn bind_unchecked(
    _namespace: &mut Namespace,
    _scope: ScopeId,
    _errors: &mut Vec<SemanticError>,
    _args: &[Arc<CompiledObject>],
) -> Arc<CompiledObject> {
    CompiledObject::placeholder()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_namespace_has_plus() {
        let ns = global_namespace();
        let plus = ns.lookup(ns.root(), "+").unwrap();
        let CompiledObject::Callable(callable) = plus.as_ref() else {
            panic!("`+` must be callable");
        };
        assert_eq!(callable.name(), "+");
        assert_eq!(callable.arity(), 2);
        assert!(!plus.is_placeholder());
    }

    #[test]
    fn test_add_stays_exact_on_ints() {
        let big: BigInt = "99999999999999999999999999".parse().unwrap();
        let result = add(&[Value::Int(big.clone()), Value::Int(BigInt::from(1))]);
        assert_eq!(result, Value::Int(big + 1));
    }

    #[test]
    fn test_add_promotes_to_float() {
        let result = add(&[Value::Int(BigInt::from(2)), Value::Float(0.5)]);
        assert_eq!(result, Value::Float(2.5));
    }

    #[test]
    fn test_plus_binder_always_succeeds() {
        let mut ns = global_namespace();
        let root = ns.root();
        let plus = ns.lookup(root, "+").unwrap();
        let CompiledObject::Callable(callable) = plus.as_ref() else {
            panic!("`+` must be callable");
        };

        let mut errors = Vec::new();
        // Wrong arity on purpose: the shipped binder does no checking.
        let result = callable.bind(&mut ns, root, &mut errors, &[]);
        assert!(errors.is_empty());
        assert!(result.is_callable());
    }
}
