use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, default_of};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter, ReflectCloneError};
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(ListInfo::new::<Self, T>().with_default(default_of::<Self>))
        })
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let not_support = || ReflectCloneError::NotSupport {
            type_path: Cow::Borrowed(Self::type_path()),
        };

        let mut items = Vec::with_capacity(Vec::len(self));
        for item in <[T]>::iter(self) {
            let cloned = item.reflect_clone()?;
            items.push(cloned.take::<T>().map_err(|_| not_support())?);
        }
        Ok(Box::new(items))
    }
}

impl<T: Reflect + Typed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|value| value as &mut dyn Reflect)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<Box<dyn Reflect>> {
        Vec::pop(self).map(|value| Box::new(value) as Box<dyn Reflect>)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{List, ReflectRef};
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn vec_type_path() {
        assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<Vec<u8>> as TypePath>::type_name(), "Vec<Vec<u8>>");
    }

    #[test]
    fn vec_list_info() {
        let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
        assert!(info.type_is::<Vec<i32>>());
        assert!(info.item_ty().is::<i32>());
        assert!(info.item_info().default_fn().is_some());
    }

    #[test]
    fn vec_push_and_iter() {
        let mut list: Vec<i32> = vec![1];
        List::push(&mut list, Box::new(2_i32)).unwrap();
        assert!(List::push(&mut list, Box::new(3_u8)).is_err());

        let ReflectRef::List(dyn_list) = list.reflect_ref() else {
            panic!("expected a list");
        };
        let items: Vec<i32> = dyn_list
            .iter()
            .filter_map(|item| item.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn vec_reflect_clone() {
        let list = vec![1_u8, 2, 3];
        let cloned = list.reflect_clone().unwrap().take::<Vec<u8>>().unwrap();
        assert_eq!(cloned, list);
    }
}
