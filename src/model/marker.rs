// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `@querybuilder` doc marker.
//!
//! A struct is selected for generation when its name contains `Model` or its
//! doc comment begins with `@querybuilder`. The marker may carry options in
//! attribute-argument syntax on its first line:
//!
//! ```rust,ignore
//! /// @querybuilder(table = "people", primary_key = "person_id")
//! /// Someone known to the system.
//! pub struct Person {
//!     pub person_id: u64,
//!     pub nickname: String,
//! }
//! ```
//!
//! Options are parsed with darling's `FromMeta`, so unknown keys and wrong
//! value types are reported instead of ignored.

use darling::FromMeta;

/// Marker token that opts a struct into generation.
pub const MARKER: &str = "@querybuilder";

/// Substring of a struct name that opts it into generation.
pub const NAME_PATTERN: &str = "Model";

/// Options carried by `@querybuilder(...)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
pub struct MarkerOptions {
    /// Table name override.
    ///
    /// Defaults to the pluralized snake-case model name.
    #[darling(default)]
    pub table: Option<String>,

    /// Column used by `first` and `last` for ordering.
    ///
    /// Defaults to `id`.
    #[darling(default)]
    pub primary_key: Option<String>
}

/// Decide whether a struct is selected for generation.
///
/// A pure predicate over the declaration's name and its doc comment (as
/// returned by [`extract_doc_comments`](crate::utils::docs::extract_doc_comments)).
///
/// # Examples
///
/// ```
/// use querygen::model::marker::qualifies;
///
/// assert!(qualifies("UserModel", None));
/// assert!(qualifies("Person", Some("@querybuilder")));
/// assert!(!qualifies("Settings", Some("Application settings.")));
/// ```
#[must_use]
pub fn qualifies(name: &str, doc: Option<&str>) -> bool {
    name.contains(NAME_PATTERN) || doc.is_some_and(|doc| doc.starts_with(MARKER))
}

/// Parse marker options from a doc comment.
///
/// Returns default options when the doc does not start with the marker or
/// the marker has no argument list.
///
/// # Errors
///
/// Returns a message describing malformed options.
pub fn parse_options(doc: Option<&str>) -> Result<MarkerOptions, String> {
    let Some(first_line) = doc.and_then(|doc| doc.lines().next()) else {
        return Ok(MarkerOptions::default());
    };
    let Some(rest) = first_line.strip_prefix(MARKER) else {
        return Ok(MarkerOptions::default());
    };
    if !rest.trim_start().starts_with('(') {
        return Ok(MarkerOptions::default());
    }

    let meta: syn::Meta = syn::parse_str(&format!("querybuilder{}", rest.trim()))
        .map_err(|err| format!("expected `{MARKER}(key = \"value\", ...)`: {err}"))?;
    let options = MarkerOptions::from_meta(&meta).map_err(|err| err.to_string())?;

    if options.table.as_deref().is_some_and(str::is_empty) {
        return Err("`table` must not be empty".to_string());
    }
    if options.primary_key.as_deref().is_some_and(str::is_empty) {
        return Err("`primary_key` must not be empty".to_string());
    }

    Ok(options)
}
