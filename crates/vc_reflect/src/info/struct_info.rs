use alloc::boxed::Box;

use vc_utils::hash::HashMap;

use crate::info::{DefaultFn, NamedField, Type, TypePath};
use crate::info::{impl_default_fn, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     #[convert(rename = "other")]
///     renamed: u8,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("renamed"), Some(1));
/// assert_eq!(info.field("renamed").unwrap().dest_name(), "other");
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: HashMap<&'static str, NamedField>,
    field_names: Box<[&'static str]>,
    default: Option<DefaultFn>,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let fields = fields.iter().map(|v| (v.name(), v.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            fields,
            field_names,
            default: None,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl Iterator<Item = &NamedField> {
        self.field_names
            .iter()
            .filter_map(|name| self.fields.get(name))
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
