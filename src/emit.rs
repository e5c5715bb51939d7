// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact emission.
//!
//! Every scanned file owns at most one artifact, a sibling named
//! `{stem}_model_gen.rs`. The emitter performs at most one filesystem change
//! per input file.
//!
//! | Units | Artifact exists | Same bytes | Outcome |
//! |-------|-----------------|------------|---------|
//! | ≥ 1 | - | yes | [`Outcome::Unchanged`] |
//! | ≥ 1 | - | no | [`Outcome::Written`] |
//! | 0 | yes | - | [`Outcome::Removed`] |
//! | 0 | no | - | [`Outcome::Skipped`] |
//!
//! # Artifact Layout
//!
//! ```text
//! // Code generated by querygen. DO NOT EDIT.
//! // Source: user.rs (module `user`)
//!
//! #[allow(unused_imports)]
//! use super::*;
//!
//! <unit for the first model>
//!
//! <unit for the second model>
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf}
};

use tracing::info;

use crate::{
    error::{Error, Result},
    template::GeneratedUnit
};

/// First line of every artifact.
pub const HEADER: &str = "// Code generated by querygen. DO NOT EDIT.";

/// Suffix replacing `.rs` in artifact names.
pub const ARTIFACT_SUFFIX: &str = "_model_gen.rs";

/// What the emitter did with one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The artifact was created or its contents replaced.
    Written,

    /// The artifact already had the rendered contents.
    Unchanged,

    /// A stale artifact was deleted.
    Removed,

    /// Nothing to write and nothing to delete.
    Skipped
}

/// Path of the artifact generated for `source`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use querygen::emit::artifact_path;
///
/// assert_eq!(
///     artifact_path(Path::new("src/models/user.rs")),
///     Path::new("src/models/user_model_gen.rs")
/// );
/// ```
#[must_use]
pub fn artifact_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{ARTIFACT_SUFFIX}"))
}

/// Compose the artifact text for `source`.
#[must_use]
pub fn compose(source: &Path, module: &str, units: &[GeneratedUnit]) -> String {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut out = format!(
        "{HEADER}\n// Source: {file_name} (module `{module}`)\n\n#[allow(unused_imports)]\nuse super::*;\n"
    );
    for unit in units {
        out.push('\n');
        out.push_str(unit.text.trim_end());
        out.push('\n');
    }
    out
}

/// Write, refresh, or remove the artifact of `source`.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the artifact when it cannot be read,
/// written or removed.
pub fn emit(source: &Path, module: &str, units: &[GeneratedUnit]) -> Result<Outcome> {
    let artifact = artifact_path(source);

    if units.is_empty() {
        return match fs::remove_file(&artifact) {
            Ok(()) => {
                info!(artifact = %artifact.display(), "removed stale artifact");
                Ok(Outcome::Removed)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Outcome::Skipped),
            Err(err) => Err(Error::io(&artifact, err))
        };
    }

    let content = compose(source, module, units);
    match fs::read(&artifact) {
        Ok(existing) if existing == content.as_bytes() => return Ok(Outcome::Unchanged),
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(Error::io(&artifact, err))
    }

    fs::write(&artifact, content).map_err(|e| Error::io(&artifact, e))?;
    info!(
        artifact = %artifact.display(),
        models = units.len(),
        "wrote artifact"
    );
    Ok(Outcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(model: &str, text: &str) -> GeneratedUnit {
        GeneratedUnit {
            model: model.to_string(),
            text:  text.to_string()
        }
    }

    #[test]
    fn artifact_is_a_sibling() {
        assert_eq!(
            artifact_path(Path::new("a/b/order.rs")),
            PathBuf::from("a/b/order_model_gen.rs")
        );
        assert_eq!(artifact_path(Path::new("mod.rs")), PathBuf::from("mod_model_gen.rs"));
    }

    #[test]
    fn composed_text_has_header_binding_and_units() {
        let text = compose(
            Path::new("src/user.rs"),
            "user",
            &[unit("A", "struct A;\n\n"), unit("B", "struct B;")]
        );
        assert_eq!(
            text,
            "// Code generated by querygen. DO NOT EDIT.\n\
             // Source: user.rs (module `user`)\n\
             \n\
             #[allow(unused_imports)]\n\
             use super::*;\n\
             \n\
             struct A;\n\
             \n\
             struct B;\n"
        );
    }

    #[test]
    fn writes_then_reports_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("user.rs");
        let units = [unit("UserModel", "struct X;")];

        assert_eq!(emit(&source, "user", &units).unwrap(), Outcome::Written);
        let first = fs::read(artifact_path(&source)).unwrap();
        assert_eq!(emit(&source, "user", &units).unwrap(), Outcome::Unchanged);
        assert_eq!(fs::read(artifact_path(&source)).unwrap(), first);
    }

    #[test]
    fn changed_units_rewrite_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("user.rs");

        emit(&source, "user", &[unit("A", "struct A;")]).unwrap();
        assert_eq!(
            emit(&source, "user", &[unit("B", "struct B;")]).unwrap(),
            Outcome::Written
        );
        let text = fs::read_to_string(artifact_path(&source)).unwrap();
        assert!(text.contains("struct B;"));
        assert!(!text.contains("struct A;"));
    }

    #[test]
    fn no_units_removes_stale_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("user.rs");
        fs::write(artifact_path(&source), "stale").unwrap();

        assert_eq!(emit(&source, "user", &[]).unwrap(), Outcome::Removed);
        assert!(!artifact_path(&source).exists());
        assert_eq!(emit(&source, "user", &[]).unwrap(), Outcome::Skipped);
    }

    #[test]
    fn unwritable_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing").join("user.rs");
        let err = emit(&source, "user", &[unit("A", "struct A;")]).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("user_model_gen.rs")));
    }
}
