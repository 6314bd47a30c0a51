//! AST matcher — decides whether one node satisfies one signature.
//!
//! Purely structural: node kinds, named fields, and token spans. A node
//! missing an expected field is "no match", never an error.

use tree_sitter::Node;

use crate::catalog::{Marker, Signature};

/// True when `node` (whose kind already matched via the index) satisfies
/// every populated field of `signature`. `depth` is the function-nesting
/// depth at the node.
pub fn node_matches(signature: &Signature, node: Node, source: &[u8], depth: u32) -> bool {
    if signature.top_level_only && depth > 0 {
        return false;
    }

    if let Some(kind) = signature.kind {
        if declaration_kind(node) != Some(kind) {
            return false;
        }
    }

    if signature.operator.is_some() || !signature.operator_any_of.is_empty() {
        let Some(op) = operator_text(node, source) else {
            return false;
        };
        if let Some(expected) = signature.operator {
            if op != expected {
                return false;
            }
        }
        if !signature.operator_any_of.is_empty() && !signature.operator_any_of.contains(&op) {
            return false;
        }
    }

    if let Some(name) = signature.callee {
        if !callee_is(node, source, name) {
            return false;
        }
    }

    if let Some(kind) = signature.callee_kind {
        let matches = node
            .child_by_field_name("function")
            .is_some_and(|f| f.kind() == kind);
        if !matches {
            return false;
        }
    }

    if !signature.constructor_any_of.is_empty() {
        let matches = node
            .child_by_field_name("constructor")
            .is_some_and(|c| c.kind() == "identifier"
                && signature.constructor_any_of.contains(&text(c, source)));
        if !matches {
            return false;
        }
    }

    if signature.object.is_some()
        || signature.property.is_some()
        || !signature.property_any_of.is_empty()
    {
        if !member_call_matches(signature, node, source) {
            return false;
        }
    }

    if let Some(kind) = signature.child_element_kind {
        if !has_named_child_of_kind(node, kind) {
            return false;
        }
    }

    if let Some(name) = signature.identifier {
        if text(node, source) != name {
            return false;
        }
    }

    if signature.requires_numeric_argument && !has_single_numeric_argument(node) {
        return false;
    }

    if signature.requires_cause_option && !has_cause_option(node, source) {
        return false;
    }

    if signature.no_catch_binding && node.child_by_field_name("parameter").is_some() {
        return false;
    }

    if let Some(marker) = signature.marker {
        if !marker_matches(marker, node, source) {
            return false;
        }
    }

    true
}

fn text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Leading declaration keyword (`const`/`let`) of a shared node kind.
fn declaration_kind(node: Node) -> Option<&'static str> {
    let token = node.child_by_field_name("kind").or_else(|| node.child(0))?;
    match token.kind() {
        "const" => Some("const"),
        "let" => Some("let"),
        "var" => Some("var"),
        _ => None,
    }
}

fn operator_text<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("operator")
        .map(|op| text(op, source))
}

/// `name(...)` — direct call by identifier name.
fn callee_is(node: Node, source: &[u8], name: &str) -> bool {
    node.child_by_field_name("function")
        .is_some_and(|f| f.kind() == "identifier" && text(f, source) == name)
}

/// `X.y(...)` — member call, refined by receiver excludes.
fn member_call_matches(signature: &Signature, node: Node, source: &[u8]) -> bool {
    let Some(function) = node.child_by_field_name("function") else {
        return false;
    };
    if function.kind() != "member_expression" {
        return false;
    }
    let Some(property) = function.child_by_field_name("property") else {
        return false;
    };
    let property_name = text(property, source);

    if let Some(expected) = signature.property {
        if property_name != expected {
            return false;
        }
    }
    if !signature.property_any_of.is_empty()
        && !signature.property_any_of.contains(&property_name)
    {
        return false;
    }

    let Some(object) = function.child_by_field_name("object") else {
        return false;
    };

    if let Some(expected) = signature.object {
        return object.kind() == "identifier" && text(object, source) == expected;
    }

    if signature.exclude_receiver_kinds.contains(&object.kind()) {
        return false;
    }
    if object.kind() == "identifier" && signature.exclude_objects.contains(&text(object, source))
    {
        return false;
    }

    true
}

fn has_named_child_of_kind(node: Node, kind: &str) -> bool {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .any(|child| child.kind() == kind)
}

/// Exactly one numeric argument, allowing a leading unary minus.
fn has_single_numeric_argument(node: Node) -> bool {
    let Some(args) = node.child_by_field_name("arguments") else {
        return false;
    };
    if args.named_child_count() != 1 {
        return false;
    }
    let Some(arg) = args.named_child(0) else {
        return false;
    };
    match arg.kind() {
        "number" => true,
        "unary_expression" => arg
            .child_by_field_name("argument")
            .is_some_and(|inner| inner.kind() == "number"),
        _ => false,
    }
}

/// `new Error(msg, { cause: ... })` — a second argument object with a
/// `cause` key distinguishes the error-cause form from a plain call.
/// Both the pair and shorthand (`{ cause }`) property forms count.
fn has_cause_option(node: Node, source: &[u8]) -> bool {
    let Some(args) = node.child_by_field_name("arguments") else {
        return false;
    };
    if args.named_child_count() < 2 {
        return false;
    }
    let Some(options) = args.named_child(1) else {
        return false;
    };
    if options.kind() != "object" {
        return false;
    }
    (0..options.named_child_count())
        .filter_map(|i| options.named_child(i))
        .any(|entry| match entry.kind() {
            "pair" => entry.child_by_field_name("key").is_some_and(|key| {
                text(key, source).trim_matches(|c| c == '"' || c == '\'') == "cause"
            }),
            "shorthand_property_identifier" => text(entry, source) == "cause",
            _ => false,
        })
}

fn marker_matches(marker: Marker, node: Node, source: &[u8]) -> bool {
    match marker {
        Marker::AsyncKeyword => {
            (0..node.child_count())
                .filter_map(|i| node.child(i))
                .any(|child| child.kind() == "async")
        }
        Marker::BigIntSuffix => text(node, source).ends_with(['n', 'N']),
        Marker::NumericSeparator => text(node, source).contains('_'),
    }
}
