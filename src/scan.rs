// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration scanning.
//!
//! Finds the source files under a root and the qualifying model structs in
//! each of them.
//!
//! # File Selection
//!
//! | Entry | Scanned |
//! |-------|---------|
//! | `user.rs` | yes |
//! | `user_model_gen.rs` | no (generated marker `_gen`) |
//! | `notes.txt` | no |
//! | `.git/`, `target/` | not descended into |
//!
//! Directory entries are visited sorted by file name so every run sees the
//! files in the same order.
//!
//! # Declaration Selection
//!
//! Only top-level `struct` items are considered. Of those:
//!
//! | Shape | Result |
//! |-------|--------|
//! | Named fields | [`ModelSpec`] |
//! | Unit (`struct EmptyModel;`) | [`ModelSpec`] with no fields |
//! | Tuple | skipped with a warning |
//! | Generic | skipped with a warning |

use std::{
    fs,
    path::{Path, PathBuf}
};

use syn::{Item, ItemStruct};
use tracing::{debug, warn};

use crate::{
    Dialect,
    error::{Error, Result},
    model::{ModelSpec, extract_fields, marker, qualifies},
    utils::docs::extract_doc_comments
};

/// File name fragment identifying generated artifacts.
pub const GENERATED_MARKER: &str = "_gen";

/// Source file extension.
const EXTENSION: &str = "rs";

/// Directory names never descended into (besides hidden ones).
const SKIPPED_DIRS: &[&str] = &["target"];

/// The qualifying declarations of one source file.
#[derive(Debug)]
pub struct ScannedFile {
    /// Path of the scanned file.
    pub path: PathBuf,

    /// Rust module the file defines.
    pub module: String,

    /// Qualifying models, in declaration order.
    pub models: Vec<ModelSpec>
}

/// List every scannable source file under `root`, in stable order.
///
/// A `root` that is a file is returned alone when it passes the name filter.
///
/// # Errors
///
/// Returns [`Error::Io`] when a directory cannot be read.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| Error::io(root, e))?;
    if metadata.is_file() {
        return Ok(if is_source_file(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files = Vec::new();
    walk(root, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        if file_type.is_dir() {
            if !is_skipped_dir(&path) {
                walk(&path, files)?;
            }
        } else if is_source_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Check whether a path names a scannable source file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use querygen::scan::is_source_file;
///
/// assert!(is_source_file(Path::new("src/user.rs")));
/// assert!(!is_source_file(Path::new("src/user_model_gen.rs")));
/// assert!(!is_source_file(Path::new("README.md")));
/// ```
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    let has_extension = path.extension().is_some_and(|ext| ext == EXTENSION);
    let generated = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(GENERATED_MARKER));

    has_extension && !generated
}

/// Rust module name defined by a source file.
///
/// `mod.rs` takes its directory's name; `lib.rs` and `main.rs` define the
/// crate root.
#[must_use]
pub fn module_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    match stem {
        "lib" | "main" => "crate".to_string(),
        "mod" => path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or("crate")
            .to_string(),
        _ => stem.to_string()
    }
}

/// Read and scan one source file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`] when
/// it is not valid Rust, and [`Error::Marker`] for malformed marker options.
pub fn scan_file(path: &Path, dialect: Dialect) -> Result<ScannedFile> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    scan_source(path, &source, dialect)
}

/// Scan already loaded source text attributed to `path`.
///
/// # Errors
///
/// See [`scan_file`].
pub fn scan_source(path: &Path, source: &str, dialect: Dialect) -> Result<ScannedFile> {
    let file = syn::parse_file(source).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source
    })?;
    let module = module_name(path);

    let mut models = Vec::new();
    for item in &file.items {
        let Item::Struct(item) = item else {
            continue;
        };
        if let Some(model) = model_from_struct(path, &module, item, dialect)? {
            models.push(model);
        }
    }

    debug!(path = %path.display(), models = models.len(), "scanned file");

    Ok(ScannedFile {
        path: path.to_path_buf(),
        module,
        models
    })
}

fn model_from_struct(
    path: &Path,
    module: &str,
    item: &ItemStruct,
    dialect: Dialect
) -> Result<Option<ModelSpec>> {
    let name = item.ident.to_string();
    let doc = extract_doc_comments(&item.attrs);
    if !qualifies(&name, doc.as_deref()) {
        return Ok(None);
    }

    if !item.generics.params.is_empty() {
        warn!(path = %path.display(), model = %name, "skipping generic struct");
        return Ok(None);
    }
    let Some(fields) = extract_fields(&item.fields) else {
        warn!(path = %path.display(), model = %name, "skipping tuple struct");
        return Ok(None);
    };

    let options = marker::parse_options(doc.as_deref()).map_err(|message| Error::Marker {
        path: path.to_path_buf(),
        model: name.clone(),
        message
    })?;

    debug!(model = %name, fields = fields.len(), "qualified declaration");

    Ok(Some(ModelSpec::new(
        module,
        item.vis.clone(),
        item.ident.clone(),
        dialect,
        fields,
        options
    )))
}
