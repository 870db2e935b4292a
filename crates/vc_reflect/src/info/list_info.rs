use crate::Reflect;
use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_default_fn, impl_type_fn};
use crate::ops::List;

/// A container for compile-time list info, e.g. `Vec<T>`.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
    default: Option<DefaultFn>,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`ListInfo`].
    #[inline]
    pub fn new<TList: List + TypePath, TItem: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
            default: None,
        }
    }

    /// Returns the [`Type`] of list items.
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
