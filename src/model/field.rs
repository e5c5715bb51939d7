// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field extraction.
//!
//! Turns the fields of a model struct into [`FieldDescriptor`]s, preserving
//! declaration order. Declaration order drives column order, method order,
//! and clause order in every generated builder.

use proc_macro2::Span;
use quote::{ToTokens, format_ident};
use syn::{Field, Fields, Ident, Type, ext::IdentExt};

use crate::utils::{docs::attribute_text, naming};

/// Built-in numeric types that receive range filters (`gt`, `ge`, `lt`, `le`).
const COMPARABLE_PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64"
];

/// One field of a model, as seen by the templates.
///
/// # Flags
///
/// | Field | Meaning |
/// |-------|---------|
/// | `comparable` | Type is a bare numeric primitive; range filters are generated |
/// | `nullable` | Always `false`; nullability is not inferred |
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field identifier, possibly raw (`r#type`).
    pub ident: Ident,

    /// Declared type, emitted verbatim in generated signatures.
    pub ty: Type,

    /// Token text of [`ty`](Self::ty).
    pub type_text: String,

    /// Whether range comparison filters are generated.
    pub comparable: bool,

    /// Whether the column may hold `NULL`.
    ///
    /// Nullability is not inferred from the type, so this is always `false`
    /// and no `IS NULL` filtering is generated.
    pub nullable: bool,

    /// Non-doc attributes of the field as source text.
    ///
    /// Carried through unmodified; the templates do not read it.
    pub raw_tag: String,

    variant: Ident
}

impl FieldDescriptor {
    /// Build a descriptor from the named field at position `index`.
    ///
    /// Returns `None` for tuple fields, which have no name.
    pub fn from_field(field: &Field, index: usize) -> Option<Self> {
        let ident = field.ident.clone()?;
        let ty = field.ty.clone();
        let variant = variant_ident(&ident.unraw().to_string(), index);

        Some(Self {
            type_text: ty.to_token_stream().to_string(),
            comparable: is_comparable(&ty),
            nullable: false,
            raw_tag: attribute_text(&field.attrs),
            ident,
            ty,
            variant
        })
    }

    /// Field name without any raw-identifier prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// SQL column name.
    pub fn column(&self) -> String {
        naming::column_name(&self.name())
    }

    /// Variant of the model's column enum.
    ///
    /// `Field{index}` when the PascalCase name is not an identifier, as for
    /// `_1` or `__`.
    pub fn variant(&self) -> &Ident {
        &self.variant
    }

    /// Builder method identifier `{prefix}{name}{suffix}`.
    pub fn method(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(&format!("{prefix}{}{suffix}", self.name()), Span::call_site())
    }
}

/// Extract every named field of a struct, in declaration order.
///
/// Unit structs yield an empty list; tuple structs yield `None`.
pub fn extract_fields(fields: &Fields) -> Option<Vec<FieldDescriptor>> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .enumerate()
            .map(|(index, field)| FieldDescriptor::from_field(field, index))
            .collect(),
        Fields::Unit => Some(Vec::new()),
        Fields::Unnamed(_) => None
    }
}

fn variant_ident(name: &str, index: usize) -> Ident {
    syn::parse_str::<Ident>(&naming::variant_name(name))
        .unwrap_or_else(|_| format_ident!("Field{index}"))
}

/// Check whether a type is one of the numeric primitives.
///
/// Only a bare, single-segment path qualifies: `i64` is comparable,
/// `std::primitive::i64`, `Option<i64>` and `&i64` are not.
fn is_comparable(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() || type_path.path.leading_colon.is_some() {
        return false;
    }

    match type_path.path.get_ident() {
        Some(ident) => COMPARABLE_PRIMITIVES.contains(&ident.to_string().as_str()),
        None => false
    }
}
