use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

use crate::{CONVERT_ATTRIBUTE_NAME, REFLECT_ATTRIBUTE_NAME};

/// Attributes of a single field.
///
/// - `#[reflect(ignore)]`
/// - `#[convert(rename = "Name")]`, `#[convert = "Name"]`
/// - `#[convert(readonly)]`
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub ignore: Option<Span>,
    pub rename: Option<LitStr>,
    pub readonly: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| out.parse_reflect(meta))?;
            } else if attr.path().is_ident(CONVERT_ATTRIBUTE_NAME) {
                match &attr.meta {
                    Meta::NameValue(pair) => match &pair.value {
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(lit), ..
                        }) => out.set_rename(lit.clone())?,
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected a string literal, e.g. `#[convert = \"Name\"]`",
                            ));
                        }
                    },
                    _ => attr.parse_nested_meta(|meta| out.parse_convert(meta))?,
                }
            }
        }

        if let Some(span) = out.ignore
            && (out.rename.is_some() || out.readonly.is_some())
        {
            return Err(syn::Error::new(
                span,
                "an ignored field cannot carry `convert` attributes",
            ));
        }

        Ok(out)
    }

    /// Whether any `#[convert(...)]` option was given.
    pub fn has_convert(&self) -> bool {
        self.rename.is_some() || self.readonly.is_some()
    }

    fn parse_reflect(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("ignore") {
            if self.ignore.replace(meta.path.span()).is_some() {
                return Err(meta.error("duplicate reflect attribute"));
            }
            Ok(())
        } else {
            Err(meta.error("unsupported reflect field attribute, expected `ignore`"))
        }
    }

    fn parse_convert(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            self.set_rename(lit)
        } else if meta.path.is_ident("readonly") {
            if self.readonly.replace(meta.path.span()).is_some() {
                return Err(meta.error("duplicate convert attribute"));
            }
            Ok(())
        } else {
            Err(meta.error("unsupported convert attribute, expected `rename` or `readonly`"))
        }
    }

    fn set_rename(&mut self, lit: LitStr) -> syn::Result<()> {
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "rename target cannot be empty"));
        }
        if self.rename.is_some() {
            return Err(syn::Error::new(lit.span(), "duplicate convert rename"));
        }
        self.rename = Some(lit);
        Ok(())
    }
}
