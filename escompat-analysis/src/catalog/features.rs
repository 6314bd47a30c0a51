//! Feature definitions, ES2015 through ES2024.
//!
//! Ordering matters: `unsupported` lists are emitted in definition order.
//! Names are the public keys used by ignore lists and the polyfill table.

use escompat_core::types::versions::*;

use super::signature::{Marker, Signature};
use super::FeatureDefinition;

/// Receivers that commonly expose same-named utility methods and must not
/// count as native usage (`_.includes(...)`).
const UTILITY_RECEIVERS: &[&str] = &["_", "lodash", "underscore", "R"];

/// Error constructors that accept an options object with `cause`.
const ERROR_CONSTRUCTORS: &[&str] = &[
    "Error",
    "TypeError",
    "RangeError",
    "SyntaxError",
    "ReferenceError",
    "EvalError",
    "URIError",
    "AggregateError",
];

fn feature(
    name: &'static str,
    min_version: EsVersion,
    signature: Signature,
) -> FeatureDefinition {
    FeatureDefinition {
        name,
        min_version,
        signature,
    }
}

/// The full catalog, in definition order.
pub fn feature_definitions() -> Vec<FeatureDefinition> {
    vec![
        // ---- ES2015 ----
        feature(
            "const",
            ES2015,
            Signature {
                kind: Some("const"),
                ..Signature::for_kinds(&["lexical_declaration"])
            },
        ),
        feature(
            "let",
            ES2015,
            Signature {
                kind: Some("let"),
                ..Signature::for_kinds(&["lexical_declaration"])
            },
        ),
        feature(
            "arrow-function",
            ES2015,
            Signature::for_kinds(&["arrow_function"]),
        ),
        feature(
            "template-literal",
            ES2015,
            Signature::for_kinds(&["template_string"]),
        ),
        // Alias expansion: declaration and expression forms.
        feature(
            "class",
            ES2015,
            Signature::for_kinds(&["class_declaration", "class"]),
        ),
        feature(
            "generator-function",
            ES2015,
            Signature::for_kinds(&["generator_function_declaration", "generator_function"]),
        ),
        feature(
            "destructuring",
            ES2015,
            Signature::for_kinds(&["object_pattern", "array_pattern"]),
        ),
        feature(
            "for-of-loop",
            ES2015,
            Signature {
                operator: Some("of"),
                ..Signature::for_kinds(&["for_in_statement"])
            },
        ),
        feature(
            "array-spread",
            ES2015,
            Signature {
                child_element_kind: Some("spread_element"),
                ..Signature::for_kinds(&["array"])
            },
        ),
        feature(
            "rest-parameters",
            ES2015,
            Signature::for_kinds(&["rest_pattern"]),
        ),
        feature(
            "module-import",
            ES2015,
            Signature::for_kinds(&["import_statement"]),
        ),
        // A single export feature covers named, default, and re-export
        // statements; tree-sitter folds them into one kind.
        feature(
            "module-export",
            ES2015,
            Signature::for_kinds(&["export_statement"]),
        ),
        feature(
            "promise",
            ES2015,
            Signature {
                constructor_any_of: &["Promise"],
                ..Signature::for_kinds(&["new_expression"])
            },
        ),
        feature(
            "symbol",
            ES2015,
            Signature {
                callee: Some("Symbol"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "object-assign",
            ES2015,
            Signature {
                object: Some("Object"),
                property: Some("assign"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "array-from",
            ES2015,
            Signature {
                object: Some("Array"),
                property_any_of: &["from", "of"],
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2016 ----
        feature(
            "exponent-operator",
            ES2016,
            Signature {
                operator: Some("**"),
                ..Signature::for_kinds(&["binary_expression"])
            },
        ),
        feature(
            "exponent-assignment",
            ES2016,
            Signature {
                operator: Some("**="),
                ..Signature::for_kinds(&["augmented_assignment_expression"])
            },
        ),
        // String.prototype.includes is ES2015; reject literal string
        // receivers so only (likely) array usage is flagged at ES2016.
        feature(
            "array-includes",
            ES2016,
            Signature {
                property: Some("includes"),
                exclude_objects: UTILITY_RECEIVERS,
                exclude_receiver_kinds: &["string", "template_string"],
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2017 ----
        feature(
            "async-function",
            ES2017,
            Signature {
                marker: Some(Marker::AsyncKeyword),
                ..Signature::for_kinds(&[
                    "function_declaration",
                    "function_expression",
                    "arrow_function",
                    "method_definition",
                ])
            },
        ),
        feature(
            "object-values",
            ES2017,
            Signature {
                object: Some("Object"),
                property: Some("values"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "object-entries",
            ES2017,
            Signature {
                object: Some("Object"),
                property: Some("entries"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "object-get-own-property-descriptors",
            ES2017,
            Signature {
                object: Some("Object"),
                property: Some("getOwnPropertyDescriptors"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "string-padding",
            ES2017,
            Signature {
                property_any_of: &["padStart", "padEnd"],
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2018 ----
        feature(
            "object-spread",
            ES2018,
            Signature {
                child_element_kind: Some("spread_element"),
                ..Signature::for_kinds(&["object"])
            },
        ),
        feature(
            "async-generator",
            ES2018,
            Signature {
                marker: Some(Marker::AsyncKeyword),
                ..Signature::for_kinds(&[
                    "generator_function_declaration",
                    "generator_function",
                ])
            },
        ),
        feature(
            "promise-finally",
            ES2018,
            Signature {
                property: Some("finally"),
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2019 ----
        feature(
            "array-flat",
            ES2019,
            Signature {
                property_any_of: &["flat", "flatMap"],
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "object-from-entries",
            ES2019,
            Signature {
                object: Some("Object"),
                property: Some("fromEntries"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "string-trim-start-end",
            ES2019,
            Signature {
                property_any_of: &["trimStart", "trimEnd"],
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "optional-catch-binding",
            ES2019,
            Signature {
                no_catch_binding: true,
                ..Signature::for_kinds(&["catch_clause"])
            },
        ),
        // ---- ES2020 ----
        // The generic number literal kind plus a suffix marker.
        feature(
            "bigint-literal",
            ES2020,
            Signature {
                marker: Some(Marker::BigIntSuffix),
                ..Signature::for_kinds(&["number"])
            },
        ),
        feature(
            "bigint-function",
            ES2020,
            Signature {
                callee: Some("BigInt"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "nullish-coalescing",
            ES2020,
            Signature {
                operator: Some("??"),
                ..Signature::for_kinds(&["binary_expression"])
            },
        ),
        feature(
            "optional-chaining",
            ES2020,
            Signature::for_kinds(&["optional_chain"]),
        ),
        feature(
            "promise-all-settled",
            ES2020,
            Signature {
                object: Some("Promise"),
                property: Some("allSettled"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "global-this",
            ES2020,
            Signature {
                identifier: Some("globalThis"),
                ..Signature::for_kinds(&["identifier"])
            },
        ),
        feature(
            "dynamic-import",
            ES2020,
            Signature {
                callee_kind: Some("import"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "string-match-all",
            ES2020,
            Signature {
                property: Some("matchAll"),
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2021 ----
        feature(
            "logical-assignment",
            ES2021,
            Signature {
                operator_any_of: &["&&=", "||=", "??="],
                ..Signature::for_kinds(&["augmented_assignment_expression"])
            },
        ),
        feature(
            "numeric-separator",
            ES2021,
            Signature {
                marker: Some(Marker::NumericSeparator),
                ..Signature::for_kinds(&["number"])
            },
        ),
        feature(
            "string-replace-all",
            ES2021,
            Signature {
                property: Some("replaceAll"),
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "promise-any",
            ES2021,
            Signature {
                object: Some("Promise"),
                property: Some("any"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "weak-ref",
            ES2021,
            Signature {
                constructor_any_of: &["WeakRef", "FinalizationRegistry"],
                ..Signature::for_kinds(&["new_expression"])
            },
        ),
        // ---- ES2022 ----
        feature(
            "class-field",
            ES2022,
            Signature::for_kinds(&["field_definition"]),
        ),
        feature(
            "private-class-member",
            ES2022,
            Signature::for_kinds(&["private_property_identifier"]),
        ),
        feature(
            "static-block",
            ES2022,
            Signature::for_kinds(&["class_static_block"]),
        ),
        feature(
            "top-level-await",
            ES2022,
            Signature {
                top_level_only: true,
                ..Signature::for_kinds(&["await_expression"])
            },
        ),
        feature(
            "error-cause",
            ES2022,
            Signature {
                constructor_any_of: ERROR_CONSTRUCTORS,
                requires_cause_option: true,
                ..Signature::for_kinds(&["new_expression"])
            },
        ),
        // `.at(-1)` overloads collide with utility libraries; require the
        // single-numeric-argument shape.
        feature(
            "array-at",
            ES2022,
            Signature {
                property: Some("at"),
                exclude_objects: UTILITY_RECEIVERS,
                requires_numeric_argument: true,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "object-has-own",
            ES2022,
            Signature {
                object: Some("Object"),
                property: Some("hasOwn"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2023 ----
        feature(
            "array-change-by-copy",
            ES2023,
            Signature {
                property_any_of: &["toSorted", "toReversed", "toSpliced"],
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "array-find-last",
            ES2023,
            Signature {
                property_any_of: &["findLast", "findLastIndex"],
                exclude_objects: UTILITY_RECEIVERS,
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        // ---- ES2024 ----
        feature(
            "object-group-by",
            ES2024,
            Signature {
                object: Some("Object"),
                property: Some("groupBy"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "map-group-by",
            ES2024,
            Signature {
                object: Some("Map"),
                property: Some("groupBy"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
        feature(
            "promise-with-resolvers",
            ES2024,
            Signature {
                object: Some("Promise"),
                property: Some("withResolvers"),
                ..Signature::for_kinds(&["call_expression"])
            },
        ),
    ]
}
