// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for query builder generation.
//!
//! Every error is fatal for the run: generation is local and deterministic,
//! so there is nothing to retry and no partial mode to continue in.

use std::path::{Path, PathBuf};

use querygen_core::UnknownDialect;
use thiserror::Error;

/// Result alias used throughout the generator.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for generation runs.
#[derive(Debug, Error)]
pub enum Error {
    /// A scanned file is not valid Rust source.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Offending file.
        path:   PathBuf,
        /// Parser diagnostic.
        source: syn::Error
    },

    /// A `@querybuilder(...)` marker carries malformed options.
    #[error("invalid @querybuilder options on `{model}` in {}: {message}", path.display())]
    Marker {
        /// File declaring the model.
        path:    PathBuf,
        /// Model identifier.
        model:   String,
        /// What was wrong with the options.
        message: String
    },

    /// Reading, writing, or removing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Offending path.
        path:   PathBuf,
        /// Underlying error.
        source: std::io::Error
    },

    /// The run configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] UnknownDialect),

    /// Rendering a builder failed.
    ///
    /// Indicates a bug in the templates rather than bad input.
    #[error("failed to render query builder for `{model}`: {message}")]
    Render {
        /// Model identifier.
        model:   String,
        /// Failure description.
        message: String
    }
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source
        }
    }

    /// Creates a render error for `model`.
    pub fn render(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            model:   model.into(),
            message: message.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = Error::io(
            "models/user.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
        );
        let message = err.to_string();
        assert!(message.contains("models/user.rs"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn unknown_dialect_converts_to_config_error() {
        let err: Error = "oracle".parse::<querygen_core::Dialect>().unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn render_error_names_model() {
        let err = Error::render("UserModel", "unbalanced output");
        assert_eq!(
            err.to_string(),
            "failed to render query builder for `UserModel`: unbalanced output"
        );
    }
}
