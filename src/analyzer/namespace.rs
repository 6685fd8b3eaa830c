use std::collections::HashMap;
use std::sync::Arc;

use super::object::CompiledObject;

/// Handle to one lexical scope inside a [`Namespace`]
///
/// Ids are only meaningful for the namespace that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A tree of lexical scopes with a symbol table per scope
///
/// The tree is arena-backed: scopes live in one `Vec` and refer to each
/// other by index, so a scope has exactly one parent by construction and
/// cycles cannot be formed. The root scope has no parent.
#[derive(Debug, Clone)]
pub struct Namespace {
    scopes: Vec<Scope>,
}

#[derive(Debug, Clone)]
struct Scope {
    name: String,
    bindings: HashMap<String, Arc<CompiledObject>>,
    children: Vec<ScopeId>,
    parent: Option<ScopeId>,
}

impl Scope {
    fn new(name: String, parent: Option<ScopeId>) -> Self {
        Scope {
            name,
            bindings: HashMap::new(),
            children: Vec::new(),
            parent,
        }
    }
}

impl Namespace {
    /// Creates a namespace containing only an empty root scope
    pub fn new(root_name: impl Into<String>) -> Self {
        Namespace {
            scopes: vec![Scope::new(root_name.into(), None)],
        }
    }

    /// Returns the id of the root scope
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a new scope and attaches it under `parent`, returning its id.
    /// Creation and attachment are one step, so the child's parent is set
    /// exactly once.
    pub fn attach_child(&mut self, parent: ScopeId, name: impl Into<String>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::new(name.into(), Some(parent)));
        self.scopes[parent.0].children.push(id);
        id
    }

    /// Binds `name` to `object` in one scope, replacing any previous local
    /// binding of the same name
    pub fn define(&mut self, scope: ScopeId, name: impl Into<String>, object: Arc<CompiledObject>) {
        self.scopes[scope.0].bindings.insert(name.into(), object);
    }

    /// Resolves `name` to its nearest enclosing binding: the local table
    /// first, then the parent chain. A root miss is `None`. Never mutates.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<Arc<CompiledObject>> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(object) = scope.bindings.get(name) {
                return Some(Arc::clone(object));
            }
            current = scope.parent;
        }
        None
    }

    /// Returns the display name of a scope
    pub fn scope_name(&self, scope: ScopeId) -> &str {
        &self.scopes[scope.0].name
    }

    /// Returns the parent of a scope, `None` for the root
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent
    }

    /// Returns the children of a scope in attachment order
    pub fn children(&self, scope: ScopeId) -> &[ScopeId] {
        &self.scopes[scope.0].children
    }

    /// Iterates over the bindings local to one scope, in no particular order
    pub fn bindings(&self, scope: ScopeId) -> impl Iterator<Item = (&str, &Arc<CompiledObject>)> {
        self.scopes[scope.0]
            .bindings
            .iter()
            .map(|(name, object)| (name.as_str(), object))
    }

    /// Total number of scopes in the tree
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::object::Value;
    use num_bigint::BigInt;

    fn val(n: i64) -> Arc<CompiledObject> {
        CompiledObject::value(Value::Int(n.into()))
    }

    #[test]
    fn test_define_and_lookup() {
        let mut ns = Namespace::new("global");
        let root = ns.root();
        ns.define(root, "x", val(42));

        assert!(ns.lookup(root, "x").is_some());
        assert!(ns.lookup(root, "y").is_none());
    }

    #[test]
    fn test_lookup_walks_parent_chain() {
        let mut ns = Namespace::new("global");
        let root = ns.root();
        ns.define(root, "x", val(1));

        let inner = ns.attach_child(root, "inner");
        assert!(ns.lookup(inner, "x").is_some());
    }

    #[test]
    fn test_local_binding_shadows_parent() {
        let mut ns = Namespace::new("global");
        let root = ns.root();
        ns.define(root, "x", val(1));

        let inner = ns.attach_child(root, "inner");
        ns.define(inner, "x", val(2));

        let shadowed = ns.lookup(inner, "x").unwrap();
        match shadowed.as_ref() {
            CompiledObject::Value(Value::Int(n)) => assert_eq!(*n, BigInt::from(2)),
            other => panic!("unexpected object: {:?}", other),
        }
        // The root still sees its own binding.
        let outer = ns.lookup(root, "x").unwrap();
        match outer.as_ref() {
            CompiledObject::Value(Value::Int(n)) => assert_eq!(*n, BigInt::from(1)),
            other => panic!("unexpected object: {:?}", other),
        }
    }

    #[test]
    fn test_inner_binding_invisible_to_parent() {
        let mut ns = Namespace::new("global");
        let root = ns.root();
        let inner = ns.attach_child(root, "inner");
        ns.define(inner, "local", val(3));

        assert!(ns.lookup(root, "local").is_none());
    }

    #[test]
    fn test_attach_child_sets_parent_and_order() {
        let mut ns = Namespace::new("global");
        let root = ns.root();
        let a = ns.attach_child(root, "a");
        let b = ns.attach_child(root, "b");

        assert_eq!(ns.parent(a), Some(root));
        assert_eq!(ns.parent(b), Some(root));
        assert_eq!(ns.parent(root), None);
        assert_eq!(ns.children(root), &[a, b]);
        assert_eq!(ns.scope_name(a), "a");
        assert_eq!(ns.scope_count(), 3);
    }
}
