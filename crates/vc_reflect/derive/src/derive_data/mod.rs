mod field_attributes;
mod reflect_derive;
mod reflect_meta;
mod reflect_struct;
mod type_attributes;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_derive::ReflectDerive;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
pub(crate) use type_attributes::TypeAttributes;
