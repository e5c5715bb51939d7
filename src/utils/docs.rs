// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction utilities.
//!
//! In Rust, doc comments (`///` and `/** */`) are stored as `#[doc = "..."]`
//! attributes. The scanner reads them to detect the `@querybuilder` marker.
//!
//! # Example
//!
//! ```rust,ignore
//! /// @querybuilder(table = "people")
//! /// A person known to the system.
//! pub struct Person { ... }
//!
//! // Extracts to: "@querybuilder(table = \"people\")\nA person known to the system."
//! ```

use syn::Attribute;

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming whitespace from each line.
///
/// # Returns
///
/// Combined doc string, or `None` if no doc comments present.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    if doc_lines.is_empty() {
        return None;
    }

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Render the non-doc attributes of an item as source text.
///
/// Each attribute is printed from its tokens and the results are joined with
/// a single space. Returns an empty string when there are none.
pub fn attribute_text(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .map(|attr| quote::ToTokens::to_token_stream(attr).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
