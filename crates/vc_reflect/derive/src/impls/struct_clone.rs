use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;
use vc_macro_utils::full_path::{CloneFP, DefaultFP, ResultFP};

/// Generate `Reflect::reflect_clone` for structs and tuple structs.
///
/// - `#[reflect(clone)]`: `Clone::clone`.
/// - `#[reflect(default)]`: start from `Default::default()`, then clone the
///   reflected fields one by one.
/// - otherwise: clone every field by reflection. Fails if a field is ignored,
///   there is nothing to fill it with.
pub(crate) fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_(vc_reflect_path);
    let type_path_ = crate::path::type_path_(vc_reflect_path);
    let clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);
    let clone_field_ = crate::path::reflect_clone_field_(vc_reflect_path);

    let body = if let Some(span) = meta.attrs().clone {
        quote_spanned! { span =>
            #ResultFP::Ok(#box_::new(<Self as #CloneFP>::clone(self)))
        }
    } else {
        let clone_field = |field: &crate::derive_data::StructField| {
            let member = field.member();
            let ty = &field.data.ty;
            let name = field.name();
            quote! {
                #clone_field_::<#ty>(
                    &self.#member,
                    <Self as #type_path_>::type_path(),
                    #name,
                )?
            }
        };

        if let Some(span) = meta.attrs().default {
            let assigns = info.active_fields().map(|field| {
                let member = field.member();
                let value = clone_field(field);
                quote!(__value.#member = #value;)
            });
            quote_spanned! { span =>
                let mut __value = <Self as #DefaultFP>::default();
                #(#assigns)*
                #ResultFP::Ok(#box_::new(__value))
            }
        } else if let Some(ignored) = info.fields().iter().find(|f| f.reflection_index.is_none()) {
            let name = ignored.name();
            quote! {
                #ResultFP::Err(#clone_error_::FieldNotCloneable {
                    type_path: ::core::convert::Into::into(<Self as #type_path_>::type_path()),
                    field: ::core::convert::Into::into(#name),
                })
            }
        } else {
            let members = info.fields().iter().map(|field| field.member());
            let values = info.fields().iter().map(clone_field);
            quote! {
                #ResultFP::Ok(#box_::new(Self {
                    #(#members: #values,)*
                }))
            }
        }
    };

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#box_<dyn #reflect_>, #clone_error_> {
            #body
        }
    }
}
