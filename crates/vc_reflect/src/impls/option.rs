use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, default_of};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Optional, ReflectCloneError};
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Optional(OptionalInfo::new::<Self, T>().with_default(default_of::<Self>))
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let cloned = match self {
            Some(value) => Some(value.reflect_clone()?.take::<T>().map_err(|_| {
                ReflectCloneError::NotSupport {
                    type_path: alloc::borrow::Cow::Borrowed(Self::type_path()),
                }
            })?),
            None => None,
        };
        Ok(Box::new(cloned))
    }
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    fn insert_value(&mut self, value: Box<dyn Reflect>) -> Result<&mut dyn Reflect, Box<dyn Reflect>> {
        let value = value.take::<T>()?;
        Ok(Option::<T>::insert(self, value))
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{Optional, ReflectMut};
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn option_type_path() {
        assert_eq!(
            <Option<String> as TypePath>::type_path(),
            "core::option::Option<alloc::string::String>"
        );
        assert_eq!(<Option<u8> as TypePath>::type_name(), "Option<u8>");
    }

    #[test]
    fn option_default_is_none() {
        let value = <Option<u8> as Typed>::type_info().default_value().unwrap();
        assert_eq!(value.take::<Option<u8>>().unwrap(), None);
    }

    #[test]
    fn option_insert_through_reflect_mut() {
        let mut value: Option<String> = None;

        let ReflectMut::Optional(dyn_opt) = value.reflect_mut() else {
            panic!("expected an optional");
        };
        assert!(dyn_opt.insert_value(Box::new(42_i32)).is_err());
        dyn_opt.insert_value(Box::new(String::from("yolo"))).unwrap();

        assert_eq!(value.as_deref(), Some("yolo"));
        assert!(Optional::is_some(&value));
    }
}
