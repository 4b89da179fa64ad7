#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the Folio workspace.
//!
//! Only one macro lives here today: [`macro@folio_error`], which turns a plain enum into a
//! `thiserror` error with context support. Consumers must depend on `thiserror` themselves
//! because the expansion refers to `::thiserror::Error`.
//!
//! ```toml
//! [dependencies]
//! folio-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Type Aliasing**: Emits `pub type Result<T, E = Name> = std::result::Result<T, E>;`
///   next to the enum.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant with a source.
/// * **Standard Conversions**: `From<Source>` for each variant holding a source field, so
///   `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. A variant with a `source` field (or a field tagged `#[source]`/`#[from]`) must also
///    carry a `context` field.
///
/// The expansion defines a private `format_context` helper in the calling module, so keep
/// one annotated enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::folio_error;
/// use std::borrow::Cow;
///
/// #[folio_error]
/// pub enum FetchError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn load(client: &reqwest::Client) -> Result<String> {
///     let response = client.get("https://example.org").send().await.context("Sending request")?;
///     response.text().await.map_err(|_| "Body was not text".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
