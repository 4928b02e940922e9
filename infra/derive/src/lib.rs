#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the `EcasShare` workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! eshare-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate-level error enums.
///
/// The annotated enum becomes a `thiserror` error that can carry an optional,
/// human-readable context string next to every failure.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A companion `<ErrorName>Ext` trait adding `.context(...)` to
///   `Result<T, ErrorName>` and to `Result<T, Source>` for every variant with a source.
/// * `From<Source>` for each variant holding a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` lifts upstream errors with an empty context.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also declare a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[eshare_derive::share_error]
/// pub enum TokenError {
///     #[error("Token file unreadable{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal token error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, TokenError> {
///     std::fs::read_to_string(path).context(format!("Reading {path}"))
/// }
/// ```
#[proc_macro_attribute]
pub fn share_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
