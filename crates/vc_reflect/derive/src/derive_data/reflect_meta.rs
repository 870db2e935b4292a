use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::{Generics, Ident, ImplGenerics, Type, TypeGenerics};

use super::TypeAttributes;
use crate::utils::StringExpr;
use vc_macro_utils::full_path::{AnyFP, OptionFP, SendFP, SyncFP};

/// Everything the generated impls need to know about the type itself.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    vc_reflect_path: syn::Path,
    /// Types of the reflected fields, used for generic bounds.
    active_types: Vec<Type>,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            vc_reflect_path: crate::path::vc_reflect(),
            active_types: Vec::new(),
        }
    }

    pub fn with_active_types(self, active_types: Vec<Type>) -> Self {
        Self {
            active_types,
            ..self
        }
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &syn::Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Whether a `static` inside a trait fn is shared by several types.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    // -------------------------------------------------------------------------
    // Type path

    /// `(module, ident)` as written in `#[reflect(type_path = "..")]`.
    fn custom_path(&self) -> Option<(Option<String>, String)> {
        let value = self.attrs.type_path.as_ref()?.value();
        Some(match value.rsplit_once("::") {
            Some((module, ident)) => (Some(module.to_owned()), ident.to_owned()),
            None => (None, value),
        })
    }

    pub fn module_path(&self) -> Option<StringExpr> {
        match self.custom_path() {
            Some((module, _)) => module.as_deref().map(StringExpr::lit),
            None => Some(StringExpr::Const(quote!(::core::module_path!()))),
        }
    }

    pub fn type_ident(&self) -> StringExpr {
        match self.custom_path() {
            Some((_, ident)) => StringExpr::lit(&ident),
            None => StringExpr::lit(&self.ident.to_string()),
        }
    }

    /// `<T0, T1>` built from `each` applied to every type parameter.
    fn generic_pieces(&self, each: fn(&Ident, &TokenStream) -> TokenStream) -> Vec<StringExpr> {
        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);

        let mut pieces = Vec::new();
        for (index, param) in self.generics.type_params().enumerate() {
            pieces.push(StringExpr::lit(if index == 0 { "<" } else { ", " }));
            pieces.push(StringExpr::Runtime(each(&param.ident, &type_path_)));
        }
        if !pieces.is_empty() {
            pieces.push(StringExpr::lit(">"));
        }
        pieces
    }

    pub fn type_path(&self) -> StringExpr {
        let mut pieces = Vec::new();
        if let Some(module) = self.module_path() {
            pieces.push(module);
            pieces.push(StringExpr::lit("::"));
        }
        pieces.push(self.type_ident());
        pieces.extend(self.generic_pieces(|ident, type_path_| {
            quote!(<#ident as #type_path_>::type_path())
        }));
        StringExpr::concat(&pieces, &self.vc_reflect_path)
    }

    pub fn type_name(&self) -> StringExpr {
        let mut pieces = vec![self.type_ident()];
        pieces.extend(self.generic_pieces(|ident, type_path_| {
            quote!(<#ident as #type_path_>::type_name())
        }));
        StringExpr::concat(&pieces, &self.vc_reflect_path)
    }

    // -------------------------------------------------------------------------
    // Generics

    /// Split generics for an impl block, adding the bounds reflection needs.
    ///
    /// - `Self: Any + Send + Sync` when the type is generic.
    /// - `T: TypePath` for every type parameter.
    /// - `FieldTy: Reflect + Typed` for every reflected field type that
    ///   mentions a type parameter, when `add_field_bounds` is set.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates = Vec::<TokenStream>::new();

        if let Some(where_clause) = where_clause {
            predicates.extend(where_clause.predicates.iter().map(ToTokens::to_token_stream));
        }

        if self.impl_with_generic() {
            predicates.push(quote!(Self: #AnyFP + #SendFP + #SyncFP));

            let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
            predicates.extend(self.generics.type_params().map(|param| {
                let ident = &param.ident;
                quote!(#ident: #type_path_)
            }));

            if add_field_bounds {
                predicates.extend(self.field_type_predicates());
            }
        }

        let where_tokens = if predicates.is_empty() {
            crate::utils::empty()
        } else {
            quote!(where #(#predicates,)*)
        };

        (impl_generics, ty_generics, where_tokens)
    }

    fn field_type_predicates(&self) -> Vec<TokenStream> {
        let params = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<Ident>>();

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn mentions(idents: &[Ident], token_stream: TokenStream) -> bool {
            token_stream.into_iter().any(|tree| match tree {
                proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
                proc_macro2::TokenTree::Group(group) => mentions(idents, group.stream()),
                _ => false,
            })
        }

        let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
        let typed_ = crate::path::typed_(&self.vc_reflect_path);

        self.active_types
            .iter()
            .filter(|ty| mentions(&params, ty.to_token_stream()))
            .map(|ty| quote!(#ty: #reflect_ + #typed_))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Info

    /// `.with_default(default_of::<Self>)` when `#[reflect(default)]` is set.
    pub fn with_default_expression(&self) -> TokenStream {
        match self.attrs.default {
            Some(span) => {
                let default_of_ = crate::path::default_of_(&self.vc_reflect_path);
                quote_spanned! { span =>
                    .with_default(#default_of_::<Self>)
                }
            }
            None => crate::utils::empty(),
        }
    }

    /// Type info tokens of an opaque type.
    pub fn to_opaque_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.vc_reflect_path);
        let type_info_ = crate::path::type_info_(&self.vc_reflect_path);
        let with_default = self.with_default_expression();

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
                    #with_default
            )
        }
    }

    /// `Some(expr)` or `None`.
    pub fn wrap_in_option(tokens: Option<TokenStream>) -> TokenStream {
        match tokens {
            Some(tokens) => quote!(#OptionFP::Some(#tokens)),
            None => quote!(#OptionFP::None),
        }
    }
}
