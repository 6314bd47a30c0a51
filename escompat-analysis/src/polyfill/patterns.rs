//! Declarative polyfill pattern table.
//!
//! Each entry maps a catalog feature name to the text heuristics that imply
//! a runtime shim for it: shim-library import paths (substring) and manual
//! shim assignments (regex). Matchers hide behind `TextMatcher` so the
//! heuristics are swappable without touching the detector.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single text heuristic.
pub trait TextMatcher: Send + Sync {
    fn matches(&self, text: &str) -> bool;
}

/// Literal fragment of a shim import path.
pub struct Substring(pub &'static str);

impl TextMatcher for Substring {
    fn matches(&self, text: &str) -> bool {
        text.contains(self.0)
    }
}

/// Manual shim assignment pattern.
pub struct Pattern(pub Regex);

impl TextMatcher for Pattern {
    fn matches(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

struct RawEntry {
    feature: &'static str,
    /// Shim import path fragments (also feed the pre-check gate).
    needles: &'static [&'static str],
    /// Manual shim assignment regexes.
    assignments: &'static [&'static str],
}

/// Generic shim-library markers for the pre-check gate, beyond the
/// per-feature needles: any of these (or the literal word "polyfill")
/// must appear before the per-pattern scan runs.
const GATE_MARKERS: &[&str] = &["core-js", "es-shims", "es5-", "es6-", "polyfill", "shim"];

const RAW_TABLE: &[RawEntry] = &[
    RawEntry {
        feature: "promise",
        needles: &["es6-promise", "promise-polyfill", "core-js/es/promise"],
        assignments: &[r"(?m)^\s*(?:window\.|self\.)?Promise\s*="],
    },
    RawEntry {
        feature: "symbol",
        needles: &["es6-symbol", "core-js/es/symbol"],
        assignments: &[],
    },
    RawEntry {
        feature: "object-assign",
        needles: &["object-assign", "core-js/es/object/assign", "object.assign"],
        assignments: &[r"Object\.assign\s*="],
    },
    RawEntry {
        feature: "array-from",
        needles: &["core-js/es/array/from", "array.from"],
        assignments: &[r"Array\.from\s*="],
    },
    RawEntry {
        feature: "array-includes",
        needles: &["array-includes", "core-js/es/array/includes", "array.prototype.includes"],
        assignments: &[r"Array\.prototype\.includes\s*="],
    },
    RawEntry {
        feature: "string-padding",
        needles: &[
            "core-js/es/string/pad-start",
            "core-js/es/string/pad-end",
            "string.prototype.padstart",
            "string.prototype.padend",
        ],
        assignments: &[r"String\.prototype\.pad(?:Start|End)\s*="],
    },
    RawEntry {
        feature: "object-values",
        needles: &["core-js/es/object/values", "object.values"],
        assignments: &[r"Object\.values\s*="],
    },
    RawEntry {
        feature: "object-entries",
        needles: &["core-js/es/object/entries", "object.entries"],
        assignments: &[r"Object\.entries\s*="],
    },
    RawEntry {
        feature: "object-from-entries",
        needles: &["core-js/es/object/from-entries", "object.fromentries"],
        assignments: &[r"Object\.fromEntries\s*="],
    },
    RawEntry {
        feature: "array-flat",
        needles: &["core-js/es/array/flat", "array.prototype.flat"],
        assignments: &[r"Array\.prototype\.flat(?:Map)?\s*="],
    },
    RawEntry {
        feature: "promise-finally",
        needles: &["core-js/es/promise/finally", "promise.prototype.finally"],
        assignments: &[r"Promise\.prototype\.finally\s*="],
    },
    RawEntry {
        feature: "promise-all-settled",
        needles: &["core-js/es/promise/all-settled", "promise.allsettled"],
        assignments: &[r"Promise\.allSettled\s*="],
    },
    RawEntry {
        feature: "promise-any",
        needles: &["core-js/es/promise/any", "promise.any"],
        assignments: &[r"Promise\.any\s*="],
    },
    RawEntry {
        feature: "global-this",
        needles: &["core-js/es/global-this", "globalthis"],
        assignments: &[r"(?m)^\s*(?:window\.|self\.)?globalThis\s*="],
    },
    RawEntry {
        feature: "string-match-all",
        needles: &["core-js/es/string/match-all", "string.prototype.matchall"],
        assignments: &[r"String\.prototype\.matchAll\s*="],
    },
    RawEntry {
        feature: "string-replace-all",
        needles: &["core-js/es/string/replace-all", "string.prototype.replaceall"],
        assignments: &[r"String\.prototype\.replaceAll\s*="],
    },
    RawEntry {
        feature: "array-at",
        needles: &["core-js/es/array/at", "array.prototype.at", "string.prototype.at"],
        assignments: &[r"(?:Array|String)\.prototype\.at\s*="],
    },
    RawEntry {
        feature: "object-has-own",
        needles: &["core-js/es/object/has-own", "object.hasown"],
        assignments: &[r"Object\.hasOwn\s*="],
    },
    RawEntry {
        feature: "array-change-by-copy",
        needles: &[
            "core-js/actual/array/to-sorted",
            "core-js/actual/array/to-reversed",
            "core-js/actual/array/to-spliced",
            "array.prototype.tosorted",
            "array.prototype.toreversed",
            "array.prototype.tospliced",
        ],
        assignments: &[r"Array\.prototype\.to(?:Sorted|Reversed|Spliced)\s*="],
    },
    RawEntry {
        feature: "array-find-last",
        needles: &[
            "core-js/actual/array/find-last",
            "core-js/actual/array/find-last-index",
            "array.prototype.findlast",
        ],
        assignments: &[r"Array\.prototype\.findLast(?:Index)?\s*="],
    },
    RawEntry {
        feature: "object-group-by",
        needles: &["core-js/actual/object/group-by", "object.groupby"],
        assignments: &[r"Object\.groupBy\s*="],
    },
    RawEntry {
        feature: "map-group-by",
        needles: &["core-js/actual/map/group-by", "map.groupby"],
        assignments: &[r"Map\.groupBy\s*="],
    },
    RawEntry {
        feature: "promise-with-resolvers",
        needles: &["core-js/actual/promise/with-resolvers", "promise.withresolvers"],
        assignments: &[r"Promise\.withResolvers\s*="],
    },
];

/// Gate: generic markers plus every import-path needle, one automaton.
static GATE: Lazy<AhoCorasick> = Lazy::new(|| {
    let needles = GATE_MARKERS
        .iter()
        .chain(RAW_TABLE.iter().flat_map(|e| e.needles.iter()));
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(needles)
        .unwrap_or_else(|e| panic!("bad polyfill gate: {e}"))
});

/// True when the source can possibly contain a polyfill.
pub(crate) fn gate_matches(text: &str) -> bool {
    GATE.is_match(text)
}

type PatternTable = Vec<(&'static str, Vec<Box<dyn TextMatcher>>)>;

/// Feature name → matchers. Names must exist in the catalog.
pub(crate) static PATTERN_TABLE: Lazy<PatternTable> = Lazy::new(|| {
    RAW_TABLE
        .iter()
        .map(|raw| {
            let mut matchers: Vec<Box<dyn TextMatcher>> = Vec::new();
            for needle in raw.needles {
                matchers.push(Box::new(Substring(needle)));
            }
            for assignment in raw.assignments {
                let regex = Regex::new(assignment)
                    .unwrap_or_else(|e| panic!("bad polyfill pattern for {}: {e}", raw.feature));
                matchers.push(Box::new(Pattern(regex)));
            }
            (raw.feature, matchers)
        })
        .collect()
});
