use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectMeta;
use vc_macro_utils::full_path::{CloneFP, DebugFP, ResultFP};

/// Implement full reflect for opaque types and unit structs.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, meta.to_opaque_info_tokens());
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("Opaque", Span::call_site()),
        get_opaque_clone_impl(meta),
        get_opaque_debug_impl(meta),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

/// Opaque types clone with `Clone`, unit structs without it are rebuilt.
fn get_opaque_clone_impl(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_(vc_reflect_path);
    let clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);

    let body = match meta.attrs().clone {
        Some(span) => quote_spanned! { span =>
            #ResultFP::Ok(#box_::new(<Self as #CloneFP>::clone(self)))
        },
        None => quote! {
            #ResultFP::Ok(#box_::new(Self))
        },
    };

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#box_<dyn #reflect_>, #clone_error_> {
            #body
        }
    }
}

/// Without `#[reflect(debug)]` the default `Reflect::reflect_debug` is kept.
fn get_opaque_debug_impl(meta: &ReflectMeta) -> TokenStream {
    match meta.attrs().debug {
        Some(span) => quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as #DebugFP>::fmt(self, f)
            }
        },
        None => crate::utils::empty(),
    }
}
