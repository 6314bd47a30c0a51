//! Browser-to-edition resolution.

mod provider;
mod resolver;
mod table;

pub use provider::{BrowserQuerySource, BrowserVersion};
pub use resolver::{floor_search, resolve_browsers, resolve_target};
pub use table::{lookup, BrowserSupport, BROWSER_TABLE, FAST_EVOLVING_BROWSERS, FAST_EVOLVING_FLOOR};
