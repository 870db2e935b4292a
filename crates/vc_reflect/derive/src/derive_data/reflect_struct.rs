use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Field, Index, Member};

use vc_macro_utils::full_path::ResultFP;

use super::{FieldAttributes, ReflectMeta};

pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position in the Rust declaration.
    pub declaration_index: usize,
    /// Position among reflected fields, `None` for ignored ones.
    pub reflection_index: Option<usize>,
}

impl StructField<'_> {
    /// `self.#member` accessor.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: self.declaration_index as u32,
                span: Span::call_site(),
            }),
        }
    }

    /// Field name as a string, the index for tuple fields.
    pub fn name(&self) -> String {
        match &self.data.ident {
            Some(ident) => ident.to_string(),
            None => self.declaration_index.to_string(),
        }
    }
}

/// A struct or tuple struct with its fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        let active_types = fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
            .map(|field| field.data.ty.clone())
            .collect();

        Self {
            meta: meta.with_active_types(active_types),
            fields,
        }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
    }

    pub fn active_len(&self) -> usize {
        self.active_fields().count()
    }

    /// Type info tokens of a struct with named fields.
    pub fn to_struct_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.name();

            let with_rename = match &field.attrs.rename {
                Some(lit) => quote!(.with_rename(#lit)),
                None => crate::utils::empty(),
            };
            let with_readonly = match field.attrs.readonly {
                Some(_) => quote!(.with_readonly(true)),
                None => crate::utils::empty(),
            };

            quote! {
                #named_field_::new::<#ty>(#name) #with_rename #with_readonly
            }
        });

        let with_default = self.meta.with_default_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
                #with_default
            )
        }
    }

    /// Type info tokens of a tuple struct.
    pub fn to_tuple_struct_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let tuple_struct_info_ = crate::path::tuple_struct_info_(vc_reflect_path);
        let unnamed_field_ = crate::path::unnamed_field_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let index = field.reflection_index.unwrap_or_default();
            quote!(#unnamed_field_::new::<#ty>(#index))
        });

        let with_default = self.meta.with_default_expression();
        let with_wrap = self.wrap_expression();

        quote! {
            #type_info_::TupleStruct(
                #tuple_struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
                #with_default
                #with_wrap
            )
        }
    }

    /// `.with_wrap(..)` for a tuple struct made of exactly one reflected field.
    fn wrap_expression(&self) -> TokenStream {
        let [field] = self.fields.as_slice() else {
            return crate::utils::empty();
        };
        if field.reflection_index.is_none() {
            return crate::utils::empty();
        }

        let vc_reflect_path = self.meta.vc_reflect_path();
        let reflect_ = crate::path::reflect_(vc_reflect_path);
        let box_ = crate::path::box_(vc_reflect_path);
        let ty = &field.data.ty;

        quote! {
            .with_wrap(|value| {
                let field = value.take::<#ty>()?;
                #ResultFP::Ok(#box_::new(Self(field)) as #box_<dyn #reflect_>)
            })
        }
    }
}
