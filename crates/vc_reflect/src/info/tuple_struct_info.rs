use alloc::boxed::Box;

use crate::info::{DefaultFn, Type, TypePath, UnnamedField, WrapFn};
use crate::info::{impl_default_fn, impl_type_fn};
use crate::ops::TupleStruct;

/// A container for compile-time tuple struct info.
///
/// A tuple struct with a single field is treated as a newtype by the copy engine.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct UserId(String);
///
/// let info = <UserId as Typed>::type_info().as_tuple_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert!(info.newtype_field().unwrap().type_is::<String>());
///
/// let wrap = info.wrap_fn().unwrap();
/// let id = wrap(Box::new(String::from("u-1"))).unwrap();
/// assert_eq!(id.take::<UserId>().unwrap().0, "u-1");
/// ```
#[derive(Clone, Debug)]
pub struct TupleStructInfo {
    ty: Type,
    fields: Box<[UnnamedField]>,
    default: Option<DefaultFn>,
    wrap: Option<WrapFn>,
}

impl TupleStructInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`TupleStructInfo`].
    pub fn new<T: TupleStruct + TypePath>(fields: &[UnnamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            default: None,
            wrap: None,
        }
    }

    /// Attaches the constructor of a newtype from its field value.
    #[inline]
    pub fn with_wrap(self, wrap: WrapFn) -> Self {
        Self {
            wrap: Some(wrap),
            ..self
        }
    }

    /// Returns the newtype constructor, generated by the derive for
    /// tuple structs whose only field is reflected.
    #[inline]
    pub const fn wrap_fn(&self) -> Option<WrapFn> {
        self.wrap
    }

    /// Returns the [`UnnamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&UnnamedField> {
        self.fields.get(index)
    }

    /// Returns the only field if this is a single-field tuple struct.
    #[inline]
    pub fn newtype_field(&self) -> Option<&UnnamedField> {
        match &*self.fields {
            [field] => Some(field),
            _ => None,
        }
    }

    /// Returns an iterator over the fields.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &UnnamedField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
