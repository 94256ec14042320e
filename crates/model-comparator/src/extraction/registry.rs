//! Immutable registry of declared types, built once from a [`Schema`].
//!
//! Building the registry resolves everything the comparator needs to know
//! about the type graph up front: which types are code lists or exceptions,
//! which member value types are boolean or multi-valued, and which methods
//! merely redeclare a method of a direct supertype.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::comparison::naming::{TypeShape, ValueShape};
use crate::model::schema::{
    erase_type, last_segment, MemberDecl, MemberKind, Schema, TypeDecl, TypeKind, Visibility,
};

/// Value types rendered with a plural name (arrays are always multi-valued).
pub const MULTI_VALUED_TYPES: &[&str] = &[
    "Collection",
    "List",
    "Set",
    "SortedSet",
    "NavigableSet",
    "Queue",
    "Deque",
    "Map",
    "SortedMap",
    "NavigableMap",
    "PointGrid",
    "PointArray",
    "ParameterValueGroup",
    "ParameterDescriptorGroup",
    "ArrayList",
    "LinkedList",
    "ArrayDeque",
    "PriorityQueue",
    "Vector",
    "Stack",
    "HashSet",
    "LinkedHashSet",
    "TreeSet",
    "EnumSet",
    "HashMap",
    "LinkedHashMap",
    "TreeMap",
    "EnumMap",
    "IdentityHashMap",
    "WeakHashMap",
    "Hashtable",
    "Properties",
];

/// Base types of every code list.
pub const CODE_LIST_TYPES: &[&str] = &["CodeList"];

/// Base types of every exception.
pub const EXCEPTION_TYPES: &[&str] = &["Exception", "RuntimeException"];

const BOOLEAN_TYPES: &[&str] = &["boolean", "Boolean", "java.lang.Boolean"];

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A member together with its resolved type information.
#[derive(Debug, Clone)]
pub struct MemberEntry {
    pub decl: MemberDecl,
    pub shape: ValueShape,
    /// A direct supertype declares a method with the same name and parameters.
    pub redeclares_supertype_method: bool,
}

impl MemberEntry {
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn is_public(&self) -> bool {
        self.decl.visibility == Visibility::Public
    }
}

/// A declared type together with its resolved type information.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub decl: TypeDecl,
    pub shape: TypeShape,
    pub members: Vec<MemberEntry>,
}

impl TypeEntry {
    pub fn name(&self) -> &str {
        self.decl.simple_name()
    }

    pub fn qualified_name(&self) -> &str {
        &self.decl.qualified_name
    }

    pub fn package_name(&self) -> &str {
        self.decl.package_name()
    }

    pub fn is_code_list(&self) -> bool {
        self.shape.code_list
    }

    /// Public members audited for this type, sorted by simple name: fields for
    /// code lists, methods otherwise.
    pub fn audited_members(&self) -> Vec<&MemberEntry> {
        let wanted = if self.is_code_list() {
            MemberKind::Field
        } else {
            MemberKind::Method
        };
        let mut members: Vec<&MemberEntry> = self
            .members
            .iter()
            .filter(|m| m.decl.kind == wanted && m.is_public())
            .collect();
        members.sort_by(|a, b| a.name().cmp(b.name()));
        members
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All declared types, indexed by qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    root_namespace: Option<String>,
    types: Vec<TypeEntry>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Resolve the type graph of a schema.
    pub fn build(schema: Schema) -> Self {
        let graph = TypeGraph::new(&schema.types);
        let resolved: Vec<(TypeShape, Vec<(ValueShape, bool)>)> = schema
            .types
            .iter()
            .map(|decl| {
                let members = decl
                    .members
                    .iter()
                    .map(|m| (graph.value_shape(m), graph.redeclares(decl, m)))
                    .collect();
                (graph.type_shape(decl), members)
            })
            .collect();
        drop(graph);

        let mut types = Vec::with_capacity(schema.types.len());
        let mut by_name = HashMap::with_capacity(schema.types.len());
        for (decl, (shape, member_info)) in schema.types.into_iter().zip(resolved) {
            let members = decl
                .members
                .iter()
                .cloned()
                .zip(member_info)
                .map(|(decl, (shape, redeclares))| MemberEntry {
                    decl,
                    shape,
                    redeclares_supertype_method: redeclares,
                })
                .collect();
            by_name.insert(decl.qualified_name.clone(), types.len());
            types.push(TypeEntry { decl, shape, members });
        }

        debug!(
            types = types.len(),
            code_lists = types.iter().filter(|t| t.shape.code_list).count(),
            redeclared = types
                .iter()
                .flat_map(|t| &t.members)
                .filter(|m| m.redeclares_supertype_method)
                .count(),
            "built type registry"
        );

        Self {
            root_namespace: schema.root_namespace,
            types,
            by_name,
        }
    }

    /// Root namespace declared by the schema, if any.
    pub fn root_namespace(&self) -> Option<&str> {
        self.root_namespace.as_deref()
    }

    pub fn types(&self) -> &[TypeEntry] {
        &self.types
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeEntry> {
        self.by_name.get(qualified_name).map(|&i| &self.types[i])
    }

    /// Public types under a root namespace, in schema order. An empty root
    /// selects every public type.
    pub fn types_under<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a TypeEntry> + 'a {
        self.types.iter().filter(move |t| {
            t.decl.visibility == Visibility::Public
                && (root.is_empty()
                || t.qualified_name()
                    .strip_prefix(root)
                    .is_some_and(|rest| rest.starts_with('.')))
        })
    }
}

// ---------------------------------------------------------------------------
// TypeGraph
// ---------------------------------------------------------------------------

/// Borrowed view of the schema used while building the registry.
struct TypeGraph<'a> {
    decls: &'a [TypeDecl],
    by_name: HashMap<&'a str, usize>,
    by_simple_name: HashMap<&'a str, usize>,
}

impl<'a> TypeGraph<'a> {
    fn new(decls: &'a [TypeDecl]) -> Self {
        let mut by_name = HashMap::new();
        let mut by_simple_name = HashMap::new();
        for (i, decl) in decls.iter().enumerate() {
            by_name.insert(decl.qualified_name.as_str(), i);
            by_simple_name.entry(decl.simple_name()).or_insert(i);
        }
        Self {
            decls,
            by_name,
            by_simple_name,
        }
    }

    /// Unqualified names fall back to the first type with that simple name.
    fn resolve(&self, name: &str) -> Option<usize> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(i);
        }
        if name.contains('.') {
            None
        } else {
            self.by_simple_name.get(name).copied()
        }
    }

    /// Whether `name` is, or transitively extends, one of `roots` or a type of
    /// the given kind.
    fn is_assignable_to(&self, name: &str, roots: &[&str], kind: Option<TypeKind>) -> bool {
        let mut visited = HashSet::new();
        self.walk(name, roots, kind, &mut visited)
    }

    fn walk(
        &self,
        name: &str,
        roots: &[&str],
        kind: Option<TypeKind>,
        visited: &mut HashSet<usize>,
    ) -> bool {
        if roots.contains(&last_segment(name)) {
            return true;
        }
        let Some(i) = self.resolve(name) else {
            return false;
        };
        if !visited.insert(i) {
            return false;
        }
        let decl = &self.decls[i];
        if kind == Some(decl.kind) {
            return true;
        }
        decl.supertypes
            .iter()
            .any(|s| self.walk(erase_type(s).0, roots, kind, visited))
    }

    fn extends(&self, decl: &TypeDecl, roots: &[&str], kind: TypeKind) -> bool {
        decl.kind == kind
            || roots.contains(&decl.simple_name())
            || decl
                .supertypes
                .iter()
                .any(|s| self.is_assignable_to(erase_type(s).0, roots, Some(kind)))
    }

    fn type_shape(&self, decl: &TypeDecl) -> TypeShape {
        if decl.kind == TypeKind::Interface {
            return TypeShape::default();
        }
        TypeShape {
            exception: self.extends(decl, EXCEPTION_TYPES, TypeKind::Exception),
            code_list: self.extends(decl, CODE_LIST_TYPES, TypeKind::CodeList),
        }
    }

    fn value_shape(&self, member: &MemberDecl) -> ValueShape {
        let Some(value_type) = member.value_type.as_deref() else {
            return ValueShape::default();
        };
        let (erased, is_array) = erase_type(value_type);
        ValueShape {
            boolean: !is_array && BOOLEAN_TYPES.contains(&erased),
            multi_valued: is_array || self.is_assignable_to(erased, MULTI_VALUED_TYPES, None),
        }
    }

    /// Whether a direct supertype of `owner` declares a method with the same
    /// name and erased parameter list as `member`.
    fn redeclares(&self, owner: &TypeDecl, member: &MemberDecl) -> bool {
        if member.kind != MemberKind::Method {
            return false;
        }
        owner
            .supertypes
            .iter()
            .filter_map(|s| self.resolve(erase_type(s).0))
            .any(|i| {
                self.decls[i].members.iter().any(|candidate| {
                    candidate.kind == MemberKind::Method
                        && candidate.name == member.name
                        && same_parameters(&candidate.parameters, &member.parameters)
                })
            })
    }
}

fn same_parameters(a: &[String], b: &[String]) -> bool {
    a.len() == b.len()
        && a.iter()
            .map(String::as_str)
            .map(erased_parameter)
            .eq(b.iter().map(String::as_str).map(erased_parameter))
}

fn erased_parameter(parameter: &str) -> (&str, bool) {
    let (name, is_array) = erase_type(parameter);
    (last_segment(name), is_array)
}
