use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes};

/// The shape a derive input is reflected as.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    TupleStruct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        check_generics(input)?;

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if is_opaque {
            return Self::opaque(meta, input);
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = collect_fields(fields.named.iter(), true)?;
                    Ok(Self::Struct(ReflectStruct::new(meta, fields)))
                }
                Fields::Unnamed(fields) => {
                    let fields = collect_fields(fields.unnamed.iter(), false)?;
                    Ok(Self::TupleStruct(ReflectStruct::new(meta, fields)))
                }
                Fields::Unit => Ok(Self::Opaque(meta)),
            },
            Data::Enum(_) => Err(syn::Error::new(
                input.ident.span(),
                "enums can only be reflected as opaque values, \
                add `#[reflect(opaque, clone)]`",
            )),
            Data::Union(_) => Err(syn::Error::new(
                input.ident.span(),
                "unions are not supported by `Reflect`",
            )),
        }
    }

    fn opaque(meta: ReflectMeta<'a>, input: &'a DeriveInput) -> syn::Result<Self> {
        if meta.attrs().clone.is_none() {
            return Err(syn::Error::new(
                input.ident.span(),
                "opaque types are copied with `Clone`, add `#[reflect(clone)]`",
            ));
        }
        Ok(Self::Opaque(meta))
    }
}

/// Only type parameters are supported: reflected types are `'static`
/// and const arguments have no type path.
fn check_generics(input: &DeriveInput) -> syn::Result<()> {
    for param in &input.generics.params {
        match param {
            GenericParam::Type(_) => {}
            GenericParam::Lifetime(_) => {
                return Err(syn::Error::new(
                    param.span(),
                    "`Reflect` cannot be derived for types with lifetime parameters",
                ));
            }
            GenericParam::Const(_) => {
                return Err(syn::Error::new(
                    param.span(),
                    "`Reflect` cannot be derived for types with const parameters",
                ));
            }
        }
    }
    Ok(())
}

fn collect_fields<'a>(
    fields: impl Iterator<Item = &'a syn::Field>,
    named: bool,
) -> syn::Result<Vec<StructField<'a>>> {
    let mut reflection_index = 0;

    fields
        .enumerate()
        .map(|(declaration_index, data)| {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;

            if !named && attrs.has_convert() {
                return Err(syn::Error::new(
                    data.span(),
                    "`convert` attributes can only be applied to named fields",
                ));
            }

            let index = if attrs.ignore.is_some() {
                None
            } else {
                reflection_index += 1;
                Some(reflection_index - 1)
            };

            Ok(StructField {
                data,
                attrs,
                declaration_index,
                reflection_index: index,
            })
        })
        .collect()
}
