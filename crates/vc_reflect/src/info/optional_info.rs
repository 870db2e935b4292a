use crate::Reflect;
use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_default_fn, impl_type_fn};
use crate::ops::Optional;

/// A container for compile-time optional info, e.g. `Option<T>`.
///
/// The copy engine treats optionals as pointers: a `None` is a nil pointer,
/// and a `Some` is followed one level at a time.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    some_ty: Type,
    some_info: fn() -> &'static TypeInfo,
    default: Option<DefaultFn>,
}

impl OptionalInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`OptionalInfo`].
    #[inline]
    pub fn new<TOpt: Optional + TypePath, TSome: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TOpt>(),
            some_ty: Type::of::<TSome>(),
            some_info: TSome::type_info,
            default: None,
        }
    }

    /// Returns the [`Type`] of the inner value.
    #[inline]
    pub const fn some_ty(&self) -> &Type {
        &self.some_ty
    }

    /// Returns the [`TypeInfo`] of the inner value.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
