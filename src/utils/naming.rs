// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions for generated code and SQL.
//!
//! | Input | Helper | Output |
//! |-------|--------|--------|
//! | `UserModel` | [`table_name`] | `users` |
//! | `createdAt` / `created_at` | [`column_name`] | `created_at` |
//! | `created_at` | [`variant_name`] | `CreatedAt` |
//! | `UserModel` | [`builder_struct_name`] | `__UserModel_query_builder` |

use convert_case::{Case, Casing};

/// Suffix dropped from model names before deriving the table name.
const MODEL_SUFFIX: &str = "Model";

/// Words whose plural is not formed by a suffix rule.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen")
];

/// Words with no distinct plural form.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "metadata",
    "news",
    "series",
    "sheep",
    "species"
];

/// Derive the SQL table name for a model.
///
/// Drops a trailing `Model` (unless nothing would remain), converts to
/// snake case and pluralizes the last word.
///
/// # Examples
///
/// ```
/// use querygen::utils::naming::table_name;
///
/// assert_eq!(table_name("UserModel"), "users");
/// assert_eq!(table_name("BlogCategory"), "blog_categories");
/// assert_eq!(table_name("Person"), "people");
/// assert_eq!(table_name("Model"), "models");
/// ```
#[must_use]
pub fn table_name(model: &str) -> String {
    let base = match model.strip_suffix(MODEL_SUFFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => model
    };
    let snake = base.to_case(Case::Snake);

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize(last)),
        None => pluralize(&snake)
    }
}

/// Pluralize a single lowercase English word.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }

    if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
    {
        format!("{word}es")
    } else if word.ends_with('y')
        && !word.ends_with("ay")
        && !word.ends_with("ey")
        && !word.ends_with("oy")
        && !word.ends_with("uy")
    {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// SQL column name for a field.
///
/// Field names that are already lowercase are used as-is; anything else is
/// converted to snake case.
#[must_use]
pub fn column_name(field: &str) -> String {
    if field.chars().any(char::is_uppercase) {
        field.to_case(Case::Snake)
    } else {
        field.to_string()
    }
}

/// Enum variant name for a field's column.
#[must_use]
pub fn variant_name(field: &str) -> String {
    field.to_case(Case::Pascal)
}

/// Name of the hidden struct implementing a model's builder trait.
///
/// Keeps the model identifier exactly, so distinct models never share a
/// builder struct.
#[must_use]
pub fn builder_struct_name(model: &str) -> String {
    format!("__{model}_query_builder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_regular() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("post"), "posts");
    }

    #[test]
    fn pluralize_es() {
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("box"), "boxes");
    }

    #[test]
    fn pluralize_ies() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("company"), "companies");
    }

    #[test]
    fn pluralize_vowel_y() {
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("toy"), "toys");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn pluralize_irregular_and_uncountable() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("news"), "news");
    }

    #[test]
    fn table_name_drops_model_suffix() {
        assert_eq!(table_name("UserModel"), "users");
        assert_eq!(table_name("OrderItemModel"), "order_items");
    }

    #[test]
    fn table_name_keeps_bare_model() {
        assert_eq!(table_name("Model"), "models");
    }

    #[test]
    fn table_name_without_suffix() {
        assert_eq!(table_name("Person"), "people");
        assert_eq!(table_name("BlogCategory"), "blog_categories");
        assert_eq!(table_name("Address"), "addresses");
    }

    #[test]
    fn column_and_variant_names() {
        assert_eq!(column_name("created_at"), "created_at");
        assert_eq!(column_name("createdAt"), "created_at");
        assert_eq!(column_name("address2"), "address2");
        assert_eq!(variant_name("created_at"), "CreatedAt");
        assert_eq!(variant_name("id"), "Id");
    }

    #[test]
    fn builder_struct_name_keeps_model_case() {
        assert_eq!(builder_struct_name("UserModel"), "__UserModel_query_builder");
        assert_ne!(builder_struct_name("UserModel"), builder_struct_name("USERModel"));
    }
}
