use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, default_of};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;

// Implements `TypePath`, `Typed` and `Reflect` for opaque `Clone + Debug` types.
//
// `default` attaches `default_of::<Self>` to the type info.
macro_rules! impl_opaque_reflect {
    (@path $ty:ty => $name:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }
    };
    (@path $ty:ty => $name:literal in $module:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                concat!($module, "::", $name)
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }
    };
    (@info $ty:ty) => {
        OpaqueInfo::new::<$ty>()
    };
    (@info $ty:ty, default) => {
        OpaqueInfo::new::<$ty>().with_default(default_of::<$ty>)
    };
    ($ty:ty => $name:literal $(in $module:literal)? $(, $default:ident)?) => {
        impl_opaque_reflect!(@path $ty => $name $(in $module)?);

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(impl_opaque_reflect!(@info $ty $(, $default)?)))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(Clone::clone(self)))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

pub(crate) use impl_opaque_reflect;

impl_opaque_reflect!(bool => "bool", default);
impl_opaque_reflect!(char => "char", default);
impl_opaque_reflect!(u8 => "u8", default);
impl_opaque_reflect!(u16 => "u16", default);
impl_opaque_reflect!(u32 => "u32", default);
impl_opaque_reflect!(u64 => "u64", default);
impl_opaque_reflect!(u128 => "u128", default);
impl_opaque_reflect!(usize => "usize", default);
impl_opaque_reflect!(i8 => "i8", default);
impl_opaque_reflect!(i16 => "i16", default);
impl_opaque_reflect!(i32 => "i32", default);
impl_opaque_reflect!(i64 => "i64", default);
impl_opaque_reflect!(i128 => "i128", default);
impl_opaque_reflect!(isize => "isize", default);
impl_opaque_reflect!(f32 => "f32", default);
impl_opaque_reflect!(f64 => "f64", default);
impl_opaque_reflect!(String => "String" in "alloc::string", default);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use alloc::string::String;

    #[test]
    fn opaque_type_paths() {
        assert_eq!(<u32 as TypePath>::type_path(), "u32");
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<String as TypePath>::type_name(), "String");
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
    }

    #[test]
    fn opaque_info_has_default() {
        let info = <f64 as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Opaque);

        let value = info.default_value().unwrap();
        assert_eq!(value.take::<f64>().unwrap(), 0.0);
    }

    #[test]
    fn opaque_clone_keeps_type() {
        let value = String::from("t1-id");
        let cloned = value.reflect_clone().unwrap();

        assert!(cloned.is::<String>());
        assert_eq!(cloned.reflect_kind(), ReflectKind::Opaque);
    }
}
