// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation runs.
//!
//! [`Generator`] walks the configured root one file at a time, in stable
//! order, and stops at the first error. Artifacts written before the error
//! stay on disk; each write is logged.
//!
//! ```rust,no_run
//! use querygen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("src/models", "postgres")?;
//! let report = Generator::new(config).run()?;
//! println!("{} models in {} files", report.models, report.scanned);
//! # Ok::<(), querygen::Error>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    Dialect,
    dialect::resolve,
    emit::{self, Outcome},
    error::Result,
    scan,
    template::{self, Format, GeneratedUnit, Plain, Pretty}
};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory tree or single file to scan.
    pub root: PathBuf,

    /// Placeholder policy for every generated builder.
    pub dialect: Dialect,

    /// Reflow artifacts with `prettyplease` instead of raw token text.
    pub pretty: bool
}

impl GeneratorConfig {
    /// Build a configuration, resolving `dialect` by name.
    ///
    /// Artifacts are pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) for an unknown dialect.
    pub fn new(root: impl Into<PathBuf>, dialect: &str) -> Result<Self> {
        Ok(Self {
            root:    root.into(),
            dialect: resolve(dialect)?,
            pretty:  true
        })
    }

    /// Set whether artifacts are pretty-printed.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Source files scanned.
    pub scanned: usize,

    /// Builders generated.
    pub models: usize,

    /// Artifacts created or rewritten.
    pub written: usize,

    /// Artifacts already up to date.
    pub unchanged: usize,

    /// Stale artifacts deleted.
    pub removed: usize
}

impl Report {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written => self.written += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Removed => self.removed += 1,
            Outcome::Skipped => {}
        }
    }
}

/// Runs scanner, templates and emitter over a root.
pub struct Generator {
    config: GeneratorConfig,
    format: Box<dyn Format>
}

impl Generator {
    /// Create a generator for `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let format: Box<dyn Format> = if config.pretty {
            Box::new(Pretty::new(Plain))
        } else {
            Box::new(Plain)
        };
        Self {
            config,
            format
        }
    }

    /// Process every source file under the configured root.
    ///
    /// # Errors
    ///
    /// Returns the first scan, render or filesystem error.
    pub fn run(&self) -> Result<Report> {
        let root = &self.config.root;
        info!(
            root = %root.display(),
            dialect = %self.config.dialect,
            "generating query builders"
        );

        let mut report = Report::default();
        for path in scan::source_files(root)? {
            let (models, outcome) = self.process(&path)?;
            report.scanned += 1;
            report.models += models;
            report.record(outcome);
        }

        info!(
            scanned = report.scanned,
            models = report.models,
            written = report.written,
            unchanged = report.unchanged,
            removed = report.removed,
            "generation finished"
        );
        Ok(report)
    }

    /// Process a single source file, regardless of the configured root.
    ///
    /// # Errors
    ///
    /// Returns the scan, render or filesystem error for `path`.
    pub fn run_file(&self, path: &Path) -> Result<Outcome> {
        self.process(path).map(|(_, outcome)| outcome)
    }

    fn process(&self, path: &Path) -> Result<(usize, Outcome)> {
        debug!(path = %path.display(), "scanning");
        let scanned = scan::scan_file(path, self.config.dialect)?;

        let units = scanned
            .models
            .iter()
            .map(|model| template::render(model, self.format.as_ref()))
            .collect::<Result<Vec<GeneratedUnit>>>()?;

        let outcome = emit::emit(&scanned.path, &scanned.module, &units)?;
        Ok((units.len(), outcome))
    }
}
