//! Paths of the `vc_reflect` items used by generated code.
//!
//! Kept in one place so a change of layout in `vc_reflect` only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `vc_reflect` crate, as seen by the caller.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned.
/// 2. For crates that depend on `vc_copy`, `::vc_copy::reflect` is returned.
/// 3. Otherwise `::vc_reflect` is returned, which may be incorrect.
///
/// This reads the caller's manifest, so it is called once per derive and
/// the result is passed down.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn box_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::__macro_exports::alloc_utils::Box
    }
}

#[inline(always)]
pub(crate) fn reflect_clone_field_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::__macro_exports::__reflect_clone_field
    }
}

#[inline(always)]
pub(crate) fn concat_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::concat
    }
}

#[inline(always)]
pub(crate) fn default_of_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::default_of
    }
}

#[inline(always)]
pub(crate) fn struct_debug_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::struct_debug
    }
}

#[inline(always)]
pub(crate) fn tuple_struct_debug_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::tuple_struct_debug
    }
}
