//! Syntax tree model supplied by the external parser.
//!
//! The engine never parses source text itself. A front end builds a
//! [`SyntaxTree`] out of [`Node`]s tagged with a [`Kind`], attaches comment
//! [`Trivia`] to the nodes that carry it, and records whatever supertype
//! information it resolved in a [`SymbolTable`]. The tree is read-only for
//! the duration of a scan.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Category of a syntax node.
///
/// The set is deliberately coarse: checks subscribe to kinds, so the enum
/// only needs to distinguish what some check might want to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Root of a parsed file.
    CompilationUnit,
    /// Class declaration.
    Class,
    /// Interface declaration.
    Interface,
    /// Enum declaration.
    Enum,
    /// Method or function declaration.
    Method,
    /// Variable or field declaration (one node per declarator).
    Variable,
    /// Generic type parameter declaration.
    TypeParameter,
    /// Method invocation expression.
    MethodInvocation,
    /// Constructor call expression (`new T(..)`).
    NewClass,
    /// Statement block.
    Block,
    /// Identifier expression.
    Identifier,
    /// Reserved kind under which comment trivia are dispatched.
    ///
    /// Trivia are not [`Node`]s; subscribing to this kind routes
    /// [`Trivia`] values through the dedicated trivia callback.
    Trivia,
}

/// A comment attached to the tree, outside the grammar proper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    comment: String,
    line: usize,
}

impl Trivia {
    /// Creates a trivia from its raw comment text and source line.
    #[must_use]
    pub fn new(comment: impl Into<String>, line: usize) -> Self {
        Self {
            comment: comment.into(),
            line,
        }
    }

    /// Raw comment text, including comment markers, possibly multi-line.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// 1-indexed line on which the comment starts.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Whether a call site invokes a named method or a constructor.
///
/// Constructors are a distinct variant rather than a magic method name, so
/// a method that happens to be named like a constructor can never collide
/// with a constructor matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    /// Invocation of the named method.
    Method(String),
    /// Constructor call.
    Constructor,
}

/// Static view over one call site, derived by the parser.
///
/// `None` anywhere means the front end could not resolve that type; such
/// entries never satisfy a name-based criterion (fail-closed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Fully-qualified static type of the receiver (or constructed type).
    pub owner_type: Option<String>,
    /// Method name or constructor marker.
    pub kind: CallKind,
    /// Fully-qualified static types of the arguments, in order.
    pub argument_types: Vec<Option<String>>,
}

impl CallSite {
    /// Creates a method call site.
    #[must_use]
    pub fn method(
        owner_type: Option<String>,
        name: impl Into<String>,
        argument_types: Vec<Option<String>>,
    ) -> Self {
        Self {
            owner_type,
            kind: CallKind::Method(name.into()),
            argument_types,
        }
    }

    /// Creates a constructor call site.
    #[must_use]
    pub fn constructor(owner_type: Option<String>, argument_types: Vec<Option<String>>) -> Self {
        Self {
            owner_type,
            kind: CallKind::Constructor,
            argument_types,
        }
    }

    /// Method name, or `None` for a constructor call.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        match &self.kind {
            CallKind::Method(name) => Some(name),
            CallKind::Constructor => None,
        }
    }

    /// Number of arguments at the call site.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.argument_types.len()
    }
}

/// Shape of a field initializer, as classified by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// A literal value (`0`, `"x"`, `true`).
    Literal,
    /// A reference to another constant (`BAR`, `Enum.MY_CONSTANT`).
    ConstantRef,
    /// A method call (`foo()`).
    MethodCall,
    /// An object or array allocation (`new Date()`, `new int[42]`).
    NewObject,
    /// Anything else.
    Other,
}

/// Declaration view over one variable or field declarator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared name.
    pub name: String,
    /// `static` modifier present.
    pub is_static: bool,
    /// `final` modifier present.
    pub is_final: bool,
    /// Initializer shape, `None` when the declarator has no initializer.
    pub initializer: Option<Initializer>,
}

impl FieldDecl {
    /// Creates a declaration view with no modifiers and no initializer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            is_final: false,
            initializer: None,
        }
    }

    /// Marks the declaration `static`.
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Marks the declaration `final`.
    #[must_use]
    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Sets the initializer shape.
    #[must_use]
    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// Kind-specific payload of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeDetail {
    /// No payload.
    None,
    /// Identifier-bearing nodes (type parameters, declaration names).
    Name(String),
    /// Method-invocation and constructor-call nodes.
    Call(CallSite),
    /// Variable-declaration nodes.
    Field(FieldDecl),
}

/// One node of the syntax tree.
///
/// Nodes are built by the front end and immutable afterwards; the builder
/// methods consume and return `self` so trees read as literals in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    kind: Kind,
    line: usize,
    column: Option<usize>,
    detail: NodeDetail,
    children: Vec<Node>,
    trivia: Vec<Trivia>,
}

impl Node {
    /// Creates a node of the given kind at a 1-indexed source line.
    #[must_use]
    pub fn new(kind: Kind, line: usize) -> Self {
        Self {
            kind,
            line,
            column: None,
            detail: NodeDetail::None,
            children: Vec::new(),
            trivia: Vec::new(),
        }
    }

    /// Sets the 1-indexed column.
    #[must_use]
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Attaches an identifier payload.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.detail = NodeDetail::Name(name.into());
        self
    }

    /// Attaches a call-site payload.
    #[must_use]
    pub fn with_call(mut self, call: CallSite) -> Self {
        self.detail = NodeDetail::Call(call);
        self
    }

    /// Attaches a declaration payload.
    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.detail = NodeDetail::Field(field);
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Attaches a comment trivia to this node.
    #[must_use]
    pub fn with_trivia(mut self, trivia: Trivia) -> Self {
        self.trivia.push(trivia);
        self
    }

    /// Kind tag of this node.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// 1-indexed source line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-indexed source column, when the parser recorded one.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Identifier payload, if this node carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.detail {
            NodeDetail::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Call-site payload, if this node carries one.
    #[must_use]
    pub fn call(&self) -> Option<&CallSite> {
        match &self.detail {
            NodeDetail::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Declaration payload, if this node carries one.
    #[must_use]
    pub fn field(&self) -> Option<&FieldDecl> {
        match &self.detail {
            NodeDetail::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Child nodes, in source order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Trivia attached to this node, in source order.
    #[must_use]
    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }
}

/// Supertype information resolved by the front end.
///
/// Maps a fully-qualified type name to the set of fully-qualified names of
/// its known supertypes (transitive, as far as the parser resolved them).
/// Types absent from the table are unresolved and fail every name-based
/// criterion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    supertypes: HashMap<String, HashSet<String>>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a type together with its known supertypes.
    #[must_use]
    pub fn with_type<I, S>(mut self, name: impl Into<String>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes.insert(
            name.into(),
            supertypes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Known supertypes of a type, or `None` if the type is unresolved.
    #[must_use]
    pub fn supertypes_of(&self, name: &str) -> Option<&HashSet<String>> {
        self.supertypes.get(name)
    }
}

/// A parsed file: root node plus resolved symbol information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxTree {
    root: Node,
    symbols: SymbolTable,
}

impl SyntaxTree {
    /// Creates a tree with an empty symbol table.
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self {
            root,
            symbols: SymbolTable::new(),
        }
    }

    /// Attaches resolved symbol information.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Root node of the file.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolved symbol information.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
