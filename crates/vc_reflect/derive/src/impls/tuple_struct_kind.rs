use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};
use syn::Ident;

use super::{get_struct_clone_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::{ReflectMeta, ReflectStruct};
use vc_macro_utils::full_path::{DebugFP, OptionFP};

/// Implement full reflect for tuple struct type.
pub(crate) fn impl_tuple_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_tuple_struct_info_tokens());
    let tuple_struct_trait_tokens = impl_trait_tuple_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        Ident::new("TupleStruct", Span::call_site()),
        get_struct_clone_impl(info),
        get_tuple_struct_debug_impl(meta),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #tuple_struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `TupleStruct` trait implementation tokens.
fn impl_trait_tuple_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let tuple_struct_ = crate::path::tuple_struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);

    // Reflected indices skip ignored fields, members keep the declaration index.
    let members = info
        .active_fields()
        .map(|field| field.member())
        .collect::<Vec<_>>();
    let field_indices = (0..members.len()).collect::<Vec<usize>>();
    let field_count = info.active_len();

    // Unit structs cannot be interpolated inside a repetition.
    let option_ = OptionFP.to_token_stream();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #tuple_struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_tuple_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().debug {
        quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as #DebugFP>::fmt(self, f)
            }
        }
    } else {
        let tuple_struct_debug_ = crate::path::tuple_struct_debug_(meta.vc_reflect_path());
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #tuple_struct_debug_(self, f)
            }
        }
    }
}
