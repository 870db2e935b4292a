use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Optional, Struct, TupleStruct};

// Implements `kind` and `as_xxx` casts for `ReflectRef` and `ReflectMut`.
macro_rules! impl_kind_casts {
    ($ty:ident, $($ref:tt)+) => {
        impl<'a> $ty<'a> {
            /// Returns the [`ReflectKind`] of this cast.
            pub const fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::TupleStruct(_) => ReflectKind::TupleStruct,
                    Self::List(_) => ReflectKind::List,
                    Self::Optional(_) => ReflectKind::Optional,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }

            impl_kind_casts!(@cast as_struct: Struct => $($ref)+ dyn Struct);
            impl_kind_casts!(@cast as_tuple_struct: TupleStruct => $($ref)+ dyn TupleStruct);
            impl_kind_casts!(@cast as_list: List => $($ref)+ dyn List);
            impl_kind_casts!(@cast as_optional: Optional => $($ref)+ dyn Optional);
        }
    };
    (@cast $name:ident : $kind:ident => $($out:tt)+) => {
        #[doc = concat!("Casts to the `", stringify!($kind), "` kind, or returns a [`ReflectKindError`].")]
        pub fn $name(self) -> Result<$($out)+, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                other => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: other.kind(),
                }),
            }
        }
    };
}

/// An immutable enumeration of ["kinds"] of a reflected type.
///
/// Created by [`Reflect::reflect_ref`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    TupleStruct(&'a dyn TupleStruct),
    List(&'a dyn List),
    Optional(&'a dyn Optional),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of ["kinds"] of a reflected type.
///
/// Created by [`Reflect::reflect_mut`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    TupleStruct(&'a mut dyn TupleStruct),
    List(&'a mut dyn List),
    Optional(&'a mut dyn Optional),
    Opaque(&'a mut dyn Reflect),
}

impl_kind_casts!(ReflectRef, &'a);
impl_kind_casts!(ReflectMut, &'a mut);
