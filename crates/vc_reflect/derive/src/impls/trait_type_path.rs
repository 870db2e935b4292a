use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::utils::StringExpr;

fn static_path_cell(vc_reflect_path: &syn::Path, generator: StringExpr) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(vc_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let type_path_ = crate::path::type_path_(vc_reflect_path);

    // Const pieces are concatenated at compile time, generic
    // arguments are only known at runtime and go through a cell.
    let (type_path, type_name) = match (meta.type_path(), meta.type_name()) {
        (StringExpr::Const(path), StringExpr::Const(name)) => (path, name),
        (path, name) => (
            static_path_cell(vc_reflect_path, path),
            static_path_cell(vc_reflect_path, name),
        ),
    };

    let type_ident = meta.type_ident();
    let module_path = ReflectMeta::wrap_in_option(
        meta.module_path()
            .map(|module| quote!(#module)),
    );

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
