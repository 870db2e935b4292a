use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// It lets the copy engine read and write values without compile-time
/// knowledge of their concrete types.
///
/// # Recommendations
///
/// Use [the derive macro] rather than implementing this trait by hand.
/// The derive also implements [`Struct`] or [`TupleStruct`] and [`Typed`]
/// depending on the shape of the type.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type id.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Type Casting
///
/// [`reflect_ref`] and [`reflect_mut`] cast to the kind traits,
/// `downcast_ref`, `downcast_mut` and `take` cast to concrete types:
///
/// ```rust
/// # use vc_reflect::{Reflect, ops::ReflectRef};
/// let list = vec![1_u8, 2, 3];
/// let ReflectRef::List(list) = list.reflect_ref() else { unreachable!() };
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1).unwrap().downcast_ref::<u8>(), Some(&2));
/// ```
///
/// [the derive macro]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`TupleStruct`]: crate::ops::TupleStruct
/// [`Typed`]: crate::info::Typed
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes the value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value`.
    ///
    /// Returns `value` back if its type is not `Self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`] of the value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Casts to the kind trait object, e.g. `&dyn Struct`.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Casts to the mutable kind trait object, e.g. `&mut dyn Struct`.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box of the same concrete type.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Debug formatting through reflection.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::TupleStruct(data) => impls::tuple_struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Optional(data) => impls::optional_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to `Box<T>`, returning the original box on failure.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the boxed value to `T`, returning the original box on failure.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn take_returns_original_box_on_mismatch() {
        let boxed: Box<dyn Reflect> = Box::new(String::from("yolo"));

        let back = boxed.take::<i32>().unwrap_err();
        assert_eq!(back.take::<String>().unwrap(), "yolo");
    }

    #[test]
    fn set_rejects_other_types() {
        let mut value = 1_i64;

        assert!(value.set(Box::new(2_i32)).is_err());
        assert_eq!(value, 1);

        value.set(Box::new(3_i64)).unwrap();
        assert_eq!(value, 3);
    }
}
