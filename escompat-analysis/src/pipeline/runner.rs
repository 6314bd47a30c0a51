//! Pipeline runner — per-file read → parse → detect, batched and ordered.

use std::path::Path;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument, warn};

use escompat_core::config::CheckJob;
use escompat_core::errors::ConfigError;
use escompat_core::types::report::{Diagnostic, DiagnosticKind, Report};
use escompat_core::types::versions::{edition_name, EsVersion, MINIMUM_VERSION};

use crate::browsers::{resolve_target, BrowserQuerySource};
use crate::catalog::Catalog;
use crate::engine::{detect_features, DetectionInput};
use crate::parsers::{JavaScriptParser, SourceParser};
use crate::polyfill::detect_polyfills;

use super::cache::{CacheStats, FileCache};

/// Orchestrates one check job across a file set.
///
/// The catalog is shared read-only; the file cache is the only mutable
/// shared state and survives across jobs until cleared.
pub struct CheckPipeline {
    catalog: &'static Catalog,
    parser: JavaScriptParser,
    cache: FileCache,
}

impl Default for CheckPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckPipeline {
    pub fn new() -> Self {
        Self::with_cache(FileCache::new())
    }

    pub fn with_cache(cache: FileCache) -> Self {
        Self {
            catalog: Catalog::global(),
            parser: JavaScriptParser::new(),
            cache,
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear()
    }

    /// Run a job with an explicit target edition (or fail safe to the
    /// minimum if only a browser query was given — see
    /// [`run_with_browser_source`](Self::run_with_browser_source)).
    pub fn run(&self, job: &CheckJob) -> Result<Report, ConfigError> {
        self.run_with_browser_source(job, None)
    }

    /// Run a job, resolving a browser query through the external
    /// browser-data collaborator when no explicit target is set.
    #[instrument(skip_all, fields(files = job.files.len()))]
    pub fn run_with_browser_source(
        &self,
        job: &CheckJob,
        browsers: Option<&dyn BrowserQuerySource>,
    ) -> Result<Report, ConfigError> {
        job.validate()?;

        let target = self.resolve_job_target(job, browsers);
        info!(edition = %edition_name(target), "checking file set");

        let outcomes: Vec<Option<Diagnostic>> = if job.batch_size == 0 {
            job.files
                .par_iter()
                .map(|path| self.check_file(path, job, target))
                .collect()
        } else {
            // Chunks run strictly sequentially; files within a chunk run
            // concurrently. Indexed collect keeps input order either way.
            let mut all = Vec::with_capacity(job.files.len());
            for chunk in job.files.chunks(job.batch_size) {
                let batch: Vec<Option<Diagnostic>> = chunk
                    .par_iter()
                    .map(|path| self.check_file(path, job, target))
                    .collect();
                all.extend(batch);
            }
            all
        };

        let diagnostics: Vec<Diagnostic> = outcomes.into_iter().flatten().collect();
        debug!(diagnostics = diagnostics.len(), "file set checked");
        Ok(Report::from_diagnostics(diagnostics))
    }

    fn resolve_job_target(
        &self,
        job: &CheckJob,
        browsers: Option<&dyn BrowserQuerySource>,
    ) -> EsVersion {
        if let Some(target) = job.target_version {
            return target;
        }
        // validate() guarantees a query exists when no target is set.
        let Some(query) = job.browser_query.as_deref() else {
            return MINIMUM_VERSION;
        };
        match browsers {
            Some(source) => resolve_target(query, source),
            None => {
                warn!(query, "no browser-data collaborator; assuming minimum edition");
                MINIMUM_VERSION
            }
        }
    }

    /// One file's outcome: None on success, or its diagnostic. A failure
    /// here never aborts the run.
    fn check_file(&self, path: &Path, job: &CheckJob, target: EsVersion) -> Option<Diagnostic> {
        let file = path.display().to_string();

        let content = match self.cache.read(path, job.use_cache) {
            Ok(content) => content,
            Err(err) => {
                return Some(Diagnostic {
                    file,
                    kind: DiagnosticKind::ReadError {
                        message: err.message,
                    },
                });
            }
        };

        let parsed = match self.parser.parse(&content, path, &job.flags) {
            Ok(parsed) => parsed,
            Err(err) => {
                let (line, column) = err.location();
                return Some(Diagnostic {
                    file,
                    kind: DiagnosticKind::ParseError {
                        line,
                        column,
                        message: err.to_string(),
                    },
                });
            }
        };

        if !job.flags.check_features {
            return None;
        }

        let polyfilled = if job.flags.check_for_polyfills {
            detect_polyfills(&content)
        } else {
            FxHashSet::default()
        };

        let outcome = detect_features(
            self.catalog,
            &parsed.tree,
            content.as_bytes(),
            &DetectionInput {
                target,
                ignore: &job.ignore,
                polyfilled: &polyfilled,
                check_polyfills: job.flags.check_for_polyfills,
            },
        );

        if outcome.unsupported.is_empty() {
            return None;
        }
        Some(Diagnostic {
            file,
            kind: DiagnosticKind::UnsupportedFeatures {
                features: outcome
                    .unsupported
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            },
        })
    }
}
