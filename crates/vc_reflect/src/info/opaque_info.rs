use crate::Reflect;
use crate::info::{DefaultFn, Type, TypePath};
use crate::info::{impl_default_fn, impl_type_fn};

/// A container for compile-time info of types without visible structure,
/// such as primitives, `String` and `SystemTime`.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    default: Option<DefaultFn>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: None,
        }
    }
}
