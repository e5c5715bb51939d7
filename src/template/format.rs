// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output formatting.
//!
//! [`Format`] turns a rendered token stream into source text. [`Plain`]
//! prints the tokens as they are; [`Pretty`] wraps any other format and
//! reflows its output with `prettyplease`.
//!
//! ```
//! use quote::quote;
//! use querygen::template::{Format, Plain, Pretty};
//!
//! let tokens = quote! { struct Unit; };
//! assert_eq!(Plain.format(&tokens).unwrap(), "struct Unit ;");
//! assert_eq!(Pretty::new(Plain).format(&tokens).unwrap(), "struct Unit;\n");
//! ```

use proc_macro2::TokenStream;

/// Turns tokens into source text.
pub trait Format {
    /// Format `tokens`.
    ///
    /// # Errors
    ///
    /// Returns the parser diagnostic when the text is not a valid file.
    fn format(&self, tokens: &TokenStream) -> syn::Result<String>;
}

/// Token text, unformatted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Format for Plain {
    fn format(&self, tokens: &TokenStream) -> syn::Result<String> {
        Ok(tokens.to_string())
    }
}

/// Pretty-printing decorator over another format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pretty<F> {
    inner: F
}

impl<F: Format> Pretty<F> {
    /// Decorate `inner`.
    pub const fn new(inner: F) -> Self {
        Self {
            inner
        }
    }
}

impl<F: Format> Format for Pretty<F> {
    fn format(&self, tokens: &TokenStream) -> syn::Result<String> {
        let text = self.inner.format(tokens)?;
        let file = syn::parse_file(&text)?;
        Ok(prettyplease::unparse(&file))
    }
}
