use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::{CONVERT_ATTRIBUTE_NAME, REFLECT_ATTRIBUTE_NAME};

/// Flags parsed from `#[reflect(...)]` on the type.
///
/// Each flag keeps the span it was written at, so the generated code
/// points back to the attribute when a bound is not satisfied.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub clone: Option<Span>,
    pub default: Option<Span>,
    pub debug: Option<Span>,
    pub opaque: Option<Span>,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| out.parse_meta(meta))?;
            } else if attr.path().is_ident(CONVERT_ATTRIBUTE_NAME) {
                return Err(syn::Error::new(
                    attr.span(),
                    "`convert` attributes can only be applied to named fields",
                ));
            }
        }

        Ok(out)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();

        let slot = if meta.path.is_ident("clone") {
            &mut self.clone
        } else if meta.path.is_ident("default") {
            &mut self.default
        } else if meta.path.is_ident("debug") {
            &mut self.debug
        } else if meta.path.is_ident("opaque") {
            &mut self.opaque
        } else if meta.path.is_ident("type_path") {
            return self.parse_type_path(meta);
        } else {
            return Err(meta.error(
                "unsupported reflect attribute, expected one of \
                `clone`, `default`, `debug`, `opaque`, `type_path`",
            ));
        };

        if slot.is_some() {
            return Err(syn::Error::new(span, "duplicate reflect attribute"));
        }
        *slot = Some(span);
        Ok(())
    }

    fn parse_type_path(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let lit: LitStr = meta.value()?.parse()?;

        let value = lit.value();
        let valid = !value.is_empty()
            && value
                .split("::")
                .all(|segment| syn::parse_str::<syn::Ident>(segment).is_ok());
        if !valid {
            return Err(syn::Error::new(
                lit.span(),
                "`type_path` must look like `crate_name::module::Name`",
            ));
        }

        if self.type_path.replace(lit).is_some() {
            return Err(syn::Error::new(
                meta.path.span(),
                "duplicate reflect attribute",
            ));
        }
        Ok(())
    }
}
