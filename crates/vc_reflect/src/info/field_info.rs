use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Field info of a named struct field.
///
/// Besides the name and type, a field carries two copy annotations:
///
/// - `rename`: the name of the field this field is copied into,
///   from `#[convert(rename = "..")]` or `#[convert = ".."]`.
/// - `readonly`: the field is never written when it is a copy target,
///   from `#[convert(readonly)]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::NamedField;
///
/// let field = NamedField::new::<String>("foo").with_rename("bar");
///
/// assert_eq!(field.name(), "foo");
/// assert_eq!(field.rename(), Some("bar"));
/// assert_eq!(field.dest_name(), "bar");
/// assert!(!field.is_readonly());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    rename: Option<&'static str>,
    readonly: bool,
}

impl NamedField {
    /// Creates a new [`NamedField`].
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            rename: None,
            readonly: false,
        }
    }

    /// Sets the name of the target field this field is copied into.
    #[inline]
    pub const fn with_rename(self, rename: &'static str) -> Self {
        Self {
            rename: Some(rename),
            ..self
        }
    }

    /// Marks the field as not settable when it is a copy target.
    #[inline]
    pub const fn with_readonly(self, readonly: bool) -> Self {
        Self { readonly, ..self }
    }

    /// Returns the [`TypeId`] of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rename annotation, if any.
    #[inline]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    /// Returns the name of the field this field is copied into.
    ///
    /// That is the rename annotation if present, otherwise the declared name.
    #[inline]
    pub const fn dest_name(&self) -> &'static str {
        match self.rename {
            Some(rename) => rename,
            None => self.name,
        }
    }

    /// Returns `true` if the field must not be written by a copy.
    #[inline]
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Returns the [`TypeInfo`] of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// UnnamedField

/// Field info of a tuple struct field.
#[derive(Clone, Debug)]
pub struct UnnamedField {
    ty_id: TypeId,
    index: usize,
    type_info: fn() -> &'static TypeInfo,
}

impl UnnamedField {
    /// Creates a new [`UnnamedField`].
    #[inline]
    pub const fn new<T: Typed>(index: usize) -> Self {
        Self {
            index,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
