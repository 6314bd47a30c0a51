//! Feature signature — the descriptor of which AST shapes count as an
//! occurrence of a feature.
//!
//! Every field is independently toggleable; a node matches a signature only
//! when all populated fields hold. Fields are checked against tree-sitter
//! node kinds, named fields, and token spans — never against raw source
//! text outside a node's own span, so feature syntax inside string literals
//! or comments can never match.

/// Extra-token checks that refine a kind match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A leading `async` keyword token on a function-like node.
    AsyncKeyword,
    /// A `number` literal with the BigInt `n` suffix.
    BigIntSuffix,
    /// A `number` literal containing a `_` separator.
    NumericSeparator,
}

#[derive(Debug, Clone)]
pub struct Signature {
    /// Concrete node kinds this signature applies to. One catalog entry may
    /// expand to several kinds (e.g. class declaration + class expression).
    pub node_kinds: &'static [&'static str],
    /// Leading-keyword discriminator on a shared node kind
    /// (`lexical_declaration` is `const` or `let`).
    pub kind: Option<&'static str>,
    /// Exact match on the node's `operator` field.
    pub operator: Option<&'static str>,
    /// One-of match on the node's `operator` field.
    pub operator_any_of: &'static [&'static str],
    /// Direct call by name: `callee(...)`.
    pub callee: Option<&'static str>,
    /// Kind of the call's function child (e.g. `import` for dynamic import).
    pub callee_kind: Option<&'static str>,
    /// `new X(...)` with X among these names.
    pub constructor_any_of: &'static [&'static str],
    /// Receiver identifier for a member call: `X.y(...)`.
    pub object: Option<&'static str>,
    /// Property name for a member call on any receiver.
    pub property: Option<&'static str>,
    pub property_any_of: &'static [&'static str],
    /// Receiver identifiers that defeat a property match (shim libraries
    /// exposing same-named helpers).
    pub exclude_objects: &'static [&'static str],
    /// Receiver node kinds that defeat a property match (e.g. string
    /// literals for array-only methods).
    pub exclude_receiver_kinds: &'static [&'static str],
    /// Requires a named child of this kind (spread element in an array).
    pub child_element_kind: Option<&'static str>,
    /// Exact global identifier match.
    pub identifier: Option<&'static str>,
    /// The call must take exactly one numeric argument (`.at(0)`).
    pub requires_numeric_argument: bool,
    /// The construction must pass an options object with a `cause` key.
    pub requires_cause_option: bool,
    /// A `catch` clause with no bound parameter.
    pub no_catch_binding: bool,
    /// Only matches at function-nesting depth zero.
    pub top_level_only: bool,
    pub marker: Option<Marker>,
}

impl Signature {
    /// A signature matching the given node kinds with no refinements.
    pub const fn for_kinds(node_kinds: &'static [&'static str]) -> Self {
        Self {
            node_kinds,
            kind: None,
            operator: None,
            operator_any_of: &[],
            callee: None,
            callee_kind: None,
            constructor_any_of: &[],
            object: None,
            property: None,
            property_any_of: &[],
            exclude_objects: &[],
            exclude_receiver_kinds: &[],
            child_element_kind: None,
            identifier: None,
            requires_numeric_argument: false,
            requires_cause_option: false,
            no_catch_binding: false,
            top_level_only: false,
            marker: None,
        }
    }
}
