//! Static browser support table.
//!
//! Thresholds are ascending `(first version, supported edition)` pairs;
//! resolution floor-searches them. Versions between thresholds inherit the
//! lower entry — the conservative reading of partial engine support.

use escompat_core::types::versions::*;

/// Support thresholds for one browser.
#[derive(Debug, Clone, Copy)]
pub struct BrowserSupport {
    pub id: &'static str,
    /// Ascending by version.
    pub thresholds: &'static [(f64, EsVersion)],
}

/// Browsers whose release cadence makes a pre-threshold version older than
/// anything realistically deployed; they are assumed to support at least
/// ES2015 even below their lowest cataloged threshold. An observed special
/// case, deliberately not generalized.
pub const FAST_EVOLVING_BROWSERS: &[&str] = &["chrome", "firefox"];
pub const FAST_EVOLVING_FLOOR: EsVersion = ES2015;

pub const BROWSER_TABLE: &[BrowserSupport] = &[
    BrowserSupport {
        id: "chrome",
        thresholds: &[
            (23.0, ES5),
            (51.0, ES2015),
            (52.0, ES2016),
            (57.0, ES2017),
            (64.0, ES2018),
            (73.0, ES2019),
            (80.0, ES2020),
            (85.0, ES2021),
            (94.0, ES2022),
            (110.0, ES2023),
            (117.0, ES2024),
        ],
    },
    BrowserSupport {
        id: "edge",
        thresholds: &[
            (12.0, ES5),
            (15.0, ES2015),
            (79.0, ES2020),
            (85.0, ES2021),
            (94.0, ES2022),
            (110.0, ES2023),
            (117.0, ES2024),
        ],
    },
    BrowserSupport {
        id: "firefox",
        thresholds: &[
            (21.0, ES5),
            (54.0, ES2015),
            (55.0, ES2016),
            (57.0, ES2017),
            (64.0, ES2018),
            (66.0, ES2019),
            (74.0, ES2020),
            (79.0, ES2021),
            (93.0, ES2022),
            (115.0, ES2023),
            (121.0, ES2024),
        ],
    },
    BrowserSupport {
        id: "safari",
        thresholds: &[
            (6.0, ES5),
            (10.0, ES2015),
            (10.1, ES2016),
            (11.1, ES2017),
            (12.0, ES2018),
            (13.0, ES2019),
            (13.1, ES2020),
            (14.1, ES2021),
            (15.4, ES2022),
            (16.4, ES2023),
            (17.4, ES2024),
        ],
    },
    BrowserSupport {
        id: "ios_saf",
        thresholds: &[
            (6.0, ES5),
            (10.0, ES2015),
            (10.3, ES2016),
            (11.3, ES2017),
            (12.0, ES2018),
            (13.0, ES2019),
            (13.4, ES2020),
            (14.5, ES2021),
            (15.4, ES2022),
            (16.4, ES2023),
            (17.4, ES2024),
        ],
    },
    BrowserSupport {
        id: "opera",
        thresholds: &[
            (15.0, ES5),
            (38.0, ES2015),
            (39.0, ES2016),
            (44.0, ES2017),
            (51.0, ES2018),
            (60.0, ES2019),
            (67.0, ES2020),
            (71.0, ES2021),
            (80.0, ES2022),
            (96.0, ES2023),
            (103.0, ES2024),
        ],
    },
    BrowserSupport {
        id: "samsung",
        thresholds: &[
            (4.0, ES5),
            (5.0, ES2015),
            (6.2, ES2016),
            (7.2, ES2017),
            (9.2, ES2018),
            (11.1, ES2019),
            (13.0, ES2020),
            (14.0, ES2021),
            (17.0, ES2022),
            (22.0, ES2023),
            (24.0, ES2024),
        ],
    },
    BrowserSupport {
        id: "node",
        thresholds: &[
            (4.0, ES5),
            (6.0, ES2015),
            (7.0, ES2016),
            (9.0, ES2017),
            (10.0, ES2018),
            (12.0, ES2019),
            (14.0, ES2020),
            (15.0, ES2021),
            (16.11, ES2022),
            (20.0, ES2023),
            (22.0, ES2024),
        ],
    },
];

/// Look up a browser by id (case-insensitive).
pub fn lookup(id: &str) -> Option<&'static BrowserSupport> {
    BROWSER_TABLE
        .iter()
        .find(|support| support.id.eq_ignore_ascii_case(id))
}
