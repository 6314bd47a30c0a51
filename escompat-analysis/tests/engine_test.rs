//! Detection engine tests.
//!
//! Tests cover: per-feature detection against minimal snippets, target
//! gating, ignore lists, receiver exclusions, scope-sensitive matching,
//! and determinism of the walk.

use std::path::Path;

use rustc_hash::FxHashSet;

use escompat_analysis::catalog::Catalog;
use escompat_analysis::engine::{detect_features, DetectionInput, DetectionOutcome};
use escompat_analysis::parsers::{JavaScriptParser, ParsedSource, SourceParser};
use escompat_core::config::CheckFlags;
use escompat_core::types::versions::*;

// ---- Helpers ----

fn parse(source: &str) -> ParsedSource {
    JavaScriptParser::new()
        .parse(source, Path::new("test.js"), &CheckFlags::default())
        .expect("fixture must parse")
}

fn detect(source: &str, target: EsVersion) -> DetectionOutcome {
    detect_with_ignore(source, target, &[])
}

fn detect_with_ignore(source: &str, target: EsVersion, ignore: &[&str]) -> DetectionOutcome {
    let parsed = parse(source);
    let ignore: FxHashSet<String> = ignore.iter().map(|s| s.to_string()).collect();
    let polyfilled = FxHashSet::default();
    detect_features(
        Catalog::global(),
        &parsed.tree,
        source.as_bytes(),
        &DetectionInput {
            target,
            ignore: &ignore,
            polyfilled: &polyfilled,
            check_polyfills: false,
        },
    )
}

/// One minimal snippet per cataloged feature.
const FEATURE_FIXTURES: &[(&str, &str)] = &[
    ("const", "const x = 1;"),
    ("let", "let x = 1;"),
    ("arrow-function", "var f = () => 1;"),
    ("template-literal", "var s = `a`;"),
    ("class", "class A {}"),
    ("generator-function", "function* g() {}"),
    ("destructuring", "var { a } = b;"),
    ("for-of-loop", "for (var x of xs) {}"),
    ("array-spread", "var a = [1, ...b];"),
    ("rest-parameters", "function f(...rest) {}"),
    ("module-import", "import x from 'm';"),
    ("module-export", "export var x = 1;"),
    ("promise", "var p = new Promise(function (r) { r(); });"),
    ("symbol", "var s = Symbol('k');"),
    ("object-assign", "Object.assign({}, a);"),
    ("array-from", "Array.from(xs);"),
    ("exponent-operator", "var y = x ** 2;"),
    ("exponent-assignment", "x **= 2;"),
    ("array-includes", "xs.includes(1);"),
    ("async-function", "async function f() {}"),
    ("object-values", "Object.values(o);"),
    ("object-entries", "Object.entries(o);"),
    (
        "object-get-own-property-descriptors",
        "Object.getOwnPropertyDescriptors(o);",
    ),
    ("string-padding", "s.padStart(2);"),
    ("object-spread", "var o = { x: 1, ...a };"),
    ("async-generator", "async function* g() {}"),
    ("promise-finally", "p.finally(done);"),
    ("array-flat", "xs.flat();"),
    ("object-from-entries", "Object.fromEntries(e);"),
    ("string-trim-start-end", "s.trimStart();"),
    ("optional-catch-binding", "try { f(); } catch { g(); }"),
    ("bigint-literal", "var n = 10n;"),
    ("bigint-function", "var n = BigInt(10);"),
    ("nullish-coalescing", "var v = a ?? b;"),
    ("optional-chaining", "var v = a?.b;"),
    ("promise-all-settled", "Promise.allSettled(ps);"),
    ("global-this", "globalThis.x = 1;"),
    ("dynamic-import", "import('m');"),
    ("string-match-all", "s.matchAll(re);"),
    ("logical-assignment", "x ||= y;"),
    ("numeric-separator", "var n = 1_000;"),
    ("string-replace-all", "s.replaceAll('a', 'b');"),
    ("promise-any", "Promise.any(ps);"),
    ("weak-ref", "var r = new WeakRef(o);"),
    ("class-field", "class A { x = 1; }"),
    ("private-class-member", "class A { #x = 1; }"),
    ("static-block", "class A { static { init(); } }"),
    ("top-level-await", "await f();"),
    ("error-cause", "new Error('m', { cause: err });"),
    ("array-at", "xs.at(-1);"),
    ("object-has-own", "Object.hasOwn(o, 'k');"),
    ("array-change-by-copy", "xs.toSorted();"),
    ("array-find-last", "xs.findLast(pred);"),
    ("object-group-by", "Object.groupBy(xs, key);"),
    ("map-group-by", "Map.groupBy(xs, key);"),
    ("promise-with-resolvers", "Promise.withResolvers();"),
];

// ---- Per-feature detection ----

#[test]
fn every_cataloged_feature_has_a_fixture() {
    let fixture_names: FxHashSet<&str> = FEATURE_FIXTURES.iter().map(|(n, _)| *n).collect();
    for feature in Catalog::global().features() {
        assert!(
            fixture_names.contains(feature.name),
            "no fixture for {}",
            feature.name
        );
    }
    assert_eq!(fixture_names.len(), Catalog::global().len());
}

#[test]
fn each_fixture_detects_its_feature() {
    for (name, snippet) in FEATURE_FIXTURES {
        let outcome = detect(snippet, ES5);
        assert_eq!(
            outcome.found.get(name),
            Some(&true),
            "{name} not detected in: {snippet}"
        );
        assert!(
            outcome.unsupported.contains(name),
            "{name} missing from unsupported at es5 for: {snippet}"
        );
    }
}

#[test]
fn fixtures_are_clean_at_their_own_edition() {
    let catalog = Catalog::global();
    for (name, snippet) in FEATURE_FIXTURES {
        let min_version = catalog
            .features()
            .iter()
            .find(|f| f.name == *name)
            .map(|f| f.min_version)
            .expect("fixture name exists in catalog");
        let outcome = detect(snippet, min_version);
        assert!(
            !outcome.unsupported.contains(name),
            "{name} flagged at its own edition"
        );
    }
}

#[test]
fn es5_source_is_fully_clean() {
    let source = r#"
        var x = 1;
        function add(a, b) { return a + b; }
        for (var i = 0; i < 10; i++) { x += add(i, x); }
        var o = { a: 1, b: "two" };
        try { add(o.a, x); } catch (e) { x = 0; }
    "#;
    let outcome = detect(source, ES5);
    assert!(outcome.unsupported.is_empty(), "{:?}", outcome.unsupported);
    assert!(outcome.found.values().all(|&v| !v));
}

#[test]
fn feature_text_inside_strings_and_comments_is_not_code() {
    let source = r#"
        var s = "const x = () => 1;";
        // let y = [...z];
        /* await Promise.any(ps); */
        var t = 'class A { #x = 1; }';
    "#;
    let outcome = detect(source, ES5);
    assert!(outcome.unsupported.is_empty(), "{:?}", outcome.unsupported);
}

// ---- Target gating and ordering ----

#[test]
fn unsupported_is_gated_by_target() {
    let source = "const f = async () => a ?? b;";
    // const/arrow are ES2015, async is ES2017, ?? is ES2020.
    let at_es5 = detect(source, ES5);
    assert_eq!(
        at_es5.unsupported,
        vec![
            "const",
            "arrow-function",
            "async-function",
            "nullish-coalescing"
        ]
    );

    let at_2017 = detect(source, ES2017);
    assert_eq!(at_2017.unsupported, vec!["nullish-coalescing"]);

    assert!(detect(source, ES2020).unsupported.is_empty());
}

#[test]
fn unsupported_shrinks_as_target_rises() {
    let source = r#"
        const f = async () => xs.flat();
        let v = a ?? b?.c;
        class A { static { init(); } }
        Promise.withResolvers();
    "#;
    let mut previous: Option<Vec<&str>> = None;
    for target in ES5..=ES2024 {
        let current = detect(source, target).unsupported;
        if let Some(prev) = previous {
            assert!(
                current.iter().all(|f| prev.contains(f)),
                "target {target}: {current:?} not a subset of {prev:?}"
            );
        }
        previous = Some(current);
    }
    assert!(previous.unwrap().is_empty());
}

#[test]
fn repeated_usage_reports_a_feature_once() {
    let outcome = detect("const a = 1; const b = 2; const c = 3;", ES5);
    assert_eq!(outcome.unsupported, vec!["const"]);
}

#[test]
fn detection_is_deterministic() {
    let source = "const f = async () => [...xs].at(-1) ?? `none`;";
    let first = detect(source, ES5);
    let second = detect(source, ES5);
    assert_eq!(first.unsupported, second.unsupported);
    assert_eq!(first.found, second.found);
}

// ---- Ignore list ----

#[test]
fn ignored_features_are_suppressed_but_still_found() {
    let source = "const f = () => 1;";
    let outcome = detect_with_ignore(source, ES5, &["const"]);
    assert_eq!(outcome.unsupported, vec!["arrow-function"]);
    assert_eq!(outcome.found.get("const"), Some(&true));
}

#[test]
fn ignoring_everything_yields_clean_report() {
    let source = "const f = () => 1;";
    let outcome = detect_with_ignore(source, ES5, &["const", "arrow-function"]);
    assert!(outcome.unsupported.is_empty());
}

// ---- Receiver exclusions and disambiguation ----

#[test]
fn utility_library_receivers_are_excluded() {
    assert!(!detect("_.includes(xs, 1);", ES5)
        .unsupported
        .contains(&"array-includes"));
    assert!(!detect("lodash.flat(xs);", ES5)
        .unsupported
        .contains(&"array-flat"));
    assert!(detect("items.includes(1);", ES5)
        .unsupported
        .contains(&"array-includes"));
}

#[test]
fn string_literal_receiver_is_not_array_includes() {
    assert!(!detect("\"haystack\".includes(\"a\");", ES5)
        .unsupported
        .contains(&"array-includes"));
    assert!(!detect("`haystack`.includes(x);", ES2015)
        .unsupported
        .contains(&"array-includes"));
}

#[test]
fn at_requires_a_single_numeric_argument() {
    assert!(detect("xs.at(0);", ES5).unsupported.contains(&"array-at"));
    assert!(detect("xs.at(-1);", ES5).unsupported.contains(&"array-at"));
    assert!(!detect("moment.at(date);", ES5)
        .unsupported
        .contains(&"array-at"));
    assert!(!detect("xs.at(0, 1);", ES5).unsupported.contains(&"array-at"));
}

#[test]
fn error_cause_requires_the_options_shape() {
    assert!(detect("new TypeError('m', { cause: e });", ES5)
        .unsupported
        .contains(&"error-cause"));
    assert!(detect("new Error('m', { cause });", ES5)
        .unsupported
        .contains(&"error-cause"));
    assert!(detect("new Error('m', { \"cause\": e });", ES5)
        .unsupported
        .contains(&"error-cause"));
    assert!(!detect("new Error('m');", ES5)
        .unsupported
        .contains(&"error-cause"));
    assert!(!detect("new Error('m', payload);", ES5)
        .unsupported
        .contains(&"error-cause"));
    assert!(!detect("new Error('m', { code });", ES5)
        .unsupported
        .contains(&"error-cause"));
}

#[test]
fn catch_with_binding_is_not_optional_catch() {
    let outcome = detect("try { f(); } catch (e) { g(e); }", ES5);
    assert!(!outcome.unsupported.contains(&"optional-catch-binding"));
}

// ---- Scope sensitivity ----

#[test]
fn await_inside_a_function_is_not_top_level() {
    let outcome = detect("async function f() { return await g(); }", ES5);
    assert!(!outcome.unsupported.contains(&"top-level-await"));
    assert!(outcome.unsupported.contains(&"async-function"));

    let outcome = detect("var f = async () => { await g(); };", ES5);
    assert!(!outcome.unsupported.contains(&"top-level-await"));
}

#[test]
fn await_at_module_top_level_is_flagged() {
    let outcome = detect("var data = await load();", ES5);
    assert!(outcome.unsupported.contains(&"top-level-await"));
}

#[test]
fn async_generator_and_async_function_are_distinct() {
    let outcome = detect("async function* stream() {}", ES5);
    assert!(outcome.unsupported.contains(&"async-generator"));

    let plain = detect("function* stream() {}", ES5);
    assert!(!plain.unsupported.contains(&"async-generator"));
    assert!(plain.unsupported.contains(&"generator-function"));
}

#[test]
fn plain_numbers_carry_no_literal_markers() {
    let outcome = detect("var n = 100; var m = 2.5;", ES5);
    assert!(!outcome.unsupported.contains(&"bigint-literal"));
    assert!(!outcome.unsupported.contains(&"numeric-separator"));
}
