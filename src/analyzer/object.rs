use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

use super::namespace::{Namespace, ScopeId};
use crate::error::SemanticError;

/// Display name of the error placeholder object
const PLACEHOLDER_NAME: &str = "<error>";

/// The decoded-literal value domain carried by inert objects and native ops
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean constant
    Bool(bool),
    /// Arbitrary-precision integer constant
    Int(BigInt),
    /// Floating-point constant
    Float(f64),
    /// String constant, escapes decoded
    Str(String),
    /// Symbol name
    Symbol(String),
}

impl Value {
    /// Human-readable name of this value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// The runtime operation a callable would perform if the program were ever
/// evaluated. Opaque to the analyzer.
pub type NativeOp = fn(&[Value]) -> Value;

/// The procedure a [`Callable`] runs when it occupies call position
///
/// A binder receives the active namespace (mutably, so richer builtins can
/// add scopes and bindings), the shared semantic-error list, and the already
/// bound argument objects. Its return value becomes the call expression's
/// compiled object. Binders must not fail; they report problems by appending
/// diagnostics.
pub trait Binder: Send + Sync {
    /// Binds one call expression
    fn bind(
        &self,
        namespace: &mut Namespace,
        scope: ScopeId,
        errors: &mut Vec<SemanticError>,
        args: &[Arc<CompiledObject>],
    ) -> Arc<CompiledObject>;
}

impl<F> Binder for F
where
    F: Fn(&mut Namespace, ScopeId, &mut Vec<SemanticError>, &[Arc<CompiledObject>]) -> Arc<CompiledObject>
        + Send
        + Sync,
{
    fn bind(
        &self,
        namespace: &mut Namespace,
        scope: ScopeId,
        errors: &mut Vec<SemanticError>,
        args: &[Arc<CompiledObject>],
    ) -> Arc<CompiledObject> {
        self(namespace, scope, errors, args)
    }
}

/// The analysis-time value bound to a resolved symbol
///
/// Exactly two capabilities exist: a plain value with no call behavior, and
/// a callable with a binder. Code must distinguish them with an exhaustive
/// match on the tag, never by structural probing.
#[derive(Debug, Clone)]
pub enum CompiledObject {
    /// An inert value; using it in call position is a semantic error
    Value(Value),
    /// A callable with name, fixed arity and binder
    Callable(Callable),
}

/// Call behavior of a callable compiled object
#[derive(Clone)]
pub struct Callable {
    name: String,
    arity: usize,
    op: Option<NativeOp>,
    binder: Arc<dyn Binder>,
}

impl Callable {
    /// Display name of the callable
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed argument count the callable expects
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The runtime operation, absent on the error placeholder
    pub fn op(&self) -> Option<NativeOp> {
        self.op
    }

    /// Invokes this callable's binder
    pub fn bind(
        &self,
        namespace: &mut Namespace,
        scope: ScopeId,
        errors: &mut Vec<SemanticError>,
        args: &[Arc<CompiledObject>],
    ) -> Arc<CompiledObject> {
        self.binder.bind(namespace, scope, errors, args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("op", &self.op.map(|_| "<native>"))
            .finish_non_exhaustive()
    }
}

impl CompiledObject {
    /// Wraps a plain value into a fresh inert object
    pub fn value(value: Value) -> Arc<Self> {
        Arc::new(CompiledObject::Value(value))
    }

    /// Constructs a callable object from its registration tuple
    pub fn callable(
        name: impl Into<String>,
        arity: usize,
        op: NativeOp,
        binder: impl Binder + 'static,
    ) -> Arc<Self> {
        Arc::new(CompiledObject::Callable(Callable {
            name: name.into(),
            arity,
            op: Some(op),
            binder: Arc::new(binder),
        }))
    }

    /// The error placeholder: tagged callable so that using it in call
    /// position does not cascade a second diagnostic, but carries no usable
    /// value. Its binder yields another placeholder.
    pub fn placeholder() -> Arc<Self> {
        Arc::new(CompiledObject::Callable(Callable {
            name: PLACEHOLDER_NAME.to_string(),
            arity: 0,
            op: None,
            binder: Arc::new(placeholder_binder),
        }))
    }

    /// Returns true for callables, including the error placeholder
    pub fn is_callable(&self) -> bool {
        matches!(self, CompiledObject::Callable(_))
    }

    /// Returns true only for the error placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            CompiledObject::Callable(callable)
                if callable.name == PLACEHOLDER_NAME && callable.op.is_none()
        )
    }

    /// The wrapped value, `None` for callables
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            CompiledObject::Value(value) => Some(value),
            CompiledObject::Callable(_) => None,
        }
    }
}

fn placeholder_binder(
    _namespace: &mut Namespace,
    _scope: ScopeId,
    _errors: &mut Vec<SemanticError>,
    _args: &[Arc<CompiledObject>],
) -> Arc<CompiledObject> {
    CompiledObject::placeholder()
}
