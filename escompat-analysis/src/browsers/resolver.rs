//! Browser version resolution — floor search and safe aggregation.
//!
//! Resolution never raises: any upstream failure degrades to the minimum
//! edition, so a broken browser query can only make the check stricter.

use tracing::{debug, warn};

use escompat_core::errors::ResolverError;
use escompat_core::types::versions::{EsVersion, MINIMUM_VERSION};

use super::provider::{BrowserQuerySource, BrowserVersion};
use super::table::{lookup, BrowserSupport, FAST_EVOLVING_BROWSERS, FAST_EVOLVING_FLOOR};

/// Resolve a browser query to a target edition via the external
/// collaborator, degrading to the minimum edition on any failure.
pub fn resolve_target(query: &str, source: &dyn BrowserQuerySource) -> EsVersion {
    match source.resolve(query) {
        Ok(browsers) => resolve_browsers(&browsers),
        Err(err) => {
            warn!(query, error = %err, "browser query failed; assuming minimum edition");
            MINIMUM_VERSION
        }
    }
}

/// Minimum edition across all resolved browsers — safe for the
/// least-capable one. Unknown browsers are excluded; if every browser is
/// unknown, the result is conservatively the minimum edition. A known
/// browser with an unparseable version resolves to the minimum edition,
/// so a browser the user asked to support never stops constraining the
/// target.
pub fn resolve_browsers(browsers: &[BrowserVersion]) -> EsVersion {
    let mut aggregate: Option<EsVersion> = None;

    for browser in browsers {
        let Some(support) = lookup(&browser.id) else {
            debug!(id = %browser.id, "unknown browser excluded from resolution");
            continue;
        };
        let resolved = match normalize_version(&browser.id, &browser.version) {
            Ok(version) => floor_search(support, version),
            Err(err) => {
                warn!(error = %err, "unparseable browser version; assuming minimum edition");
                MINIMUM_VERSION
            }
        };
        aggregate = Some(aggregate.map_or(resolved, |current| current.min(resolved)));
    }

    aggregate.unwrap_or(MINIMUM_VERSION)
}

/// Greatest threshold ≤ `version`. Below the smallest threshold the
/// fallback is the minimum edition, except for the fast-evolving browsers.
pub fn floor_search(support: &BrowserSupport, version: f64) -> EsVersion {
    let mut best = None;
    for &(threshold, edition) in support.thresholds {
        if threshold <= version {
            best = Some(edition);
        } else {
            break;
        }
    }
    best.unwrap_or_else(|| {
        if FAST_EVOLVING_BROWSERS.contains(&support.id) {
            FAST_EVOLVING_FLOOR
        } else {
            MINIMUM_VERSION
        }
    })
}

/// Normalize a raw version string to major.minor. Range versions
/// ("4.4-4.4.4") resolve to their lower bound.
fn normalize_version(browser: &str, raw: &str) -> Result<f64, ResolverError> {
    let lower = raw.split('-').next().unwrap_or(raw).trim();
    let mut segments = lower.split('.');
    let major = segments.next().unwrap_or("");
    let numeric = match segments.next() {
        Some(minor) => format!("{major}.{minor}"),
        None => major.to_string(),
    };
    numeric
        .parse::<f64>()
        .map_err(|_| ResolverError::InvalidVersion {
            browser: browser.to_string(),
            version: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use escompat_core::types::versions::*;

    fn version(id: &str, v: &str) -> BrowserVersion {
        BrowserVersion::new(id, v)
    }

    #[test]
    fn floor_picks_greatest_threshold_not_above() {
        let safari = lookup("safari").unwrap();
        // 9 sits between the (6, ES5) and (10, ES2015) thresholds.
        assert_eq!(floor_search(safari, 9.0), ES5);
        assert_eq!(floor_search(safari, 10.0), ES2015);
        assert_eq!(floor_search(safari, 15.9), ES2022);
    }

    #[test]
    fn below_lowest_threshold_falls_back_conservatively() {
        let safari = lookup("safari").unwrap();
        assert_eq!(floor_search(safari, 5.0), MINIMUM_VERSION);

        // The fast-evolving exception.
        let chrome = lookup("chrome").unwrap();
        assert_eq!(floor_search(chrome, 20.0), FAST_EVOLVING_FLOOR);
        let firefox = lookup("firefox").unwrap();
        assert_eq!(floor_search(firefox, 3.5), FAST_EVOLVING_FLOOR);
    }

    #[test]
    fn aggregate_is_minimum_across_browsers() {
        let target = resolve_browsers(&[version("chrome", "120"), version("safari", "9")]);
        assert_eq!(target, ES5);

        // Adding a less-capable browser can only lower the result.
        let higher = resolve_browsers(&[version("chrome", "120")]);
        assert!(higher > target);
    }

    #[test]
    fn unknown_browsers_are_excluded() {
        let target = resolve_browsers(&[
            version("netscape", "4"),
            version("chrome", "120"),
        ]);
        assert_eq!(target, resolve_browsers(&[version("chrome", "120")]));

        // All unknown: conservative minimum.
        assert_eq!(resolve_browsers(&[version("netscape", "4")]), MINIMUM_VERSION);
    }

    #[test]
    fn version_strings_normalize() {
        assert_eq!(normalize_version("safari", "11.0.3").unwrap(), 11.0);
        assert_eq!(normalize_version("ios_saf", "4.4-4.4.4").unwrap(), 4.4);
        assert!(normalize_version("safari", "TP").is_err());
    }

    #[test]
    fn unparseable_version_resolves_to_minimum() {
        // A known browser with a garbage version must keep constraining
        // the target, not drop out of the aggregation.
        let target = resolve_browsers(&[version("chrome", "120"), version("safari", "TP")]);
        assert_eq!(target, MINIMUM_VERSION);

        assert_eq!(resolve_browsers(&[version("safari", "TP")]), MINIMUM_VERSION);
    }

    #[test]
    fn failing_query_source_degrades_to_minimum() {
        struct Failing;
        impl BrowserQuerySource for Failing {
            fn resolve(&self, query: &str) -> Result<Vec<BrowserVersion>, ResolverError> {
                Err(ResolverError::Provider {
                    query: query.to_string(),
                    message: "no browserslist data".to_string(),
                })
            }
        }
        assert_eq!(resolve_target("defaults", &Failing), MINIMUM_VERSION);
    }
}
