//! ECMAScript edition ordinals.
//!
//! Editions are plain ordinals so that "newer than" is numeric comparison:
//! ES5 = 5, ES2015 = 6, ES2016 = 7, ... ES2024 = 15.

/// An ECMAScript edition ordinal.
pub type EsVersion = u32;

pub const ES5: EsVersion = 5;
pub const ES2015: EsVersion = 6;
pub const ES2016: EsVersion = 7;
pub const ES2017: EsVersion = 8;
pub const ES2018: EsVersion = 9;
pub const ES2019: EsVersion = 10;
pub const ES2020: EsVersion = 11;
pub const ES2021: EsVersion = 12;
pub const ES2022: EsVersion = 13;
pub const ES2023: EsVersion = 14;
pub const ES2024: EsVersion = 15;

/// The most conservative edition the checker will ever assume.
pub const MINIMUM_VERSION: EsVersion = ES5;

/// Human-readable edition name (for diagnostics and logs).
pub fn edition_name(version: EsVersion) -> String {
    match version {
        ES5 => "es5".to_string(),
        v if v >= ES2015 => format!("es{}", 2009 + v),
        v => format!("es{v}"),
    }
}
