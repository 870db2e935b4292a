use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::derive_data::ReflectMeta;
use vc_macro_utils::full_path::ResultFP;

/// Generate implementation code for `Reflect`.
///
/// `kind` is the `ReflectKind` variant, `reflect_clone_tokens` and
/// `reflect_debug_tokens` are complete method definitions.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: Ident,
    reflect_clone_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> #ResultFP<(), #box_<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }

            #reflect_clone_tokens

            #reflect_debug_tokens
        }
    }
}
