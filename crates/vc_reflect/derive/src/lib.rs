//! Derive macro for `vc_reflect`.
//!
//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static CONVERT_ATTRIBUTE_NAME: &str = "convert";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// Implements `TypePath`, `Typed`, `Reflect` and the kind trait for a type.
///
/// | Input                   | Kind          |
/// |-------------------------|---------------|
/// | struct with named fields| `Struct`      |
/// | tuple struct            | `TupleStruct` |
/// | unit struct             | `Opaque`      |
/// | `#[reflect(opaque)]`    | `Opaque`      |
///
/// Enums are only accepted as opaque values.
///
/// # Type attributes
///
/// Written as `#[reflect(...)]` on the type.
///
/// - `clone`: `reflect_clone` uses [`Clone`] instead of cloning field by field.
///   Required for opaque types.
/// - `default`: the type info carries a default constructor based on [`Default`].
///   The copy engine needs it to allocate the pointee of an `Option<Self>`
///   destination and to append elements to a `Vec<Self>`.
/// - `debug`: `reflect_debug` uses [`Debug`](core::fmt::Debug).
/// - `opaque`: hide the fields, the type is copied as a whole.
/// - `type_path = "my_crate::module::Name"`: overrides the type path.
///   Generic arguments are appended automatically.
///
/// # Field attributes
///
/// - `#[reflect(ignore)]`: the field is invisible to reflection.
/// - `#[convert(rename = "Other")]` or `#[convert = "Other"]`: when this
///   struct is the source of a copy, the value goes to the destination field
///   named `Other`.
/// - `#[convert(readonly)]`: when this struct is the destination of a copy,
///   the field is never written.
///
/// # Example
///
/// ```ignore
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Record {
///     #[convert(rename = "name")]
///     login: String,
///     #[convert(readonly)]
///     id: u64,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, convert))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
