use alloc::boxed::Box;
use core::any::TypeId;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::ConvertError;

// -----------------------------------------------------------------------------
// Coercion

/// A transfer that needs no registered converter.
///
/// The set is closed: two types either match one of these rules or the
/// value goes through the registry.
///
/// # Examples
///
/// ```
/// use vc_convert::{Coercion, Numeric};
/// use vc_reflect::info::Typed;
///
/// let widen = Coercion::between(i32::type_info(), i64::type_info());
/// assert_eq!(widen, Some(Coercion::Numeric(Numeric::I32, Numeric::I64)));
///
/// // Narrowing needs a converter.
/// assert_eq!(Coercion::between(i64::type_info(), i32::type_info()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Both sides have the same type, the source is cloned.
    Identity,
    /// Lossless numeric widening, see [`Numeric::widens_to`].
    Numeric(Numeric, Numeric),
    /// The source is a newtype around the destination type.
    NewtypeUnwrap,
    /// The destination is a newtype around the source type.
    NewtypeWrap,
}

impl Coercion {
    /// Selects the coercion from `from` to `to`, if any.
    pub fn between(from: &TypeInfo, to: &TypeInfo) -> Option<Self> {
        let (from_id, to_id) = (from.ty().id(), to.ty().id());

        if from_id == to_id {
            return Some(Self::Identity);
        }

        if let (Some(a), Some(b)) = (Numeric::of(from_id), Numeric::of(to_id))
            && a.widens_to(b)
        {
            return Some(Self::Numeric(a, b));
        }

        if newtype_of(from) == Some(to_id) {
            return Some(Self::NewtypeUnwrap);
        }

        if newtype_of(to) == Some(from_id) {
            return Some(Self::NewtypeWrap);
        }

        None
    }

    /// Assigns `from` to `to` according to this coercion.
    ///
    /// `self` must come from [`Coercion::between`] on the type info of the
    /// same two values, otherwise [`ConvertError::MismatchedOutput`] is returned.
    pub fn apply(self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), ConvertError> {
        let expected = to.reflect_type_path();
        let found = from.reflect_type_path();
        let mismatch = ConvertError::MismatchedOutput { expected, found };

        match self {
            Self::Identity => assign(to, clone_of(from, expected)?),
            Self::Numeric(a, b) => match a.load(from) {
                Some(number) => assign(to, b.store(number)),
                None => Err(mismatch),
            },
            Self::NewtypeUnwrap => {
                let ReflectRef::TupleStruct(outer) = from.reflect_ref() else {
                    return Err(mismatch);
                };
                match outer.field(0) {
                    Some(inner) => assign(to, clone_of(inner, expected)?),
                    None => Err(mismatch),
                }
            }
            Self::NewtypeWrap => {
                let value = clone_of(from, expected)?;
                let ReflectMut::TupleStruct(outer) = to.reflect_mut() else {
                    return Err(mismatch);
                };
                match outer.field_mut(0) {
                    Some(inner) => assign(inner, value),
                    None => Err(mismatch),
                }
            }
        }
    }

    /// Builds a fresh value of type `to` from `from`, without a destination to
    /// assign into.
    ///
    /// Returns `Ok(None)` when the value cannot be built this way, which only
    /// happens for [`Coercion::NewtypeWrap`] into a newtype without a
    /// constructor in its type info.
    ///
    /// ```
    /// use vc_convert::Coercion;
    /// use vc_reflect::info::Typed;
    ///
    /// let coercion = Coercion::between(u16::type_info(), u64::type_info()).unwrap();
    /// let value = coercion.build(&7_u16, u64::type_info()).unwrap().unwrap();
    /// assert_eq!(value.take::<u64>().unwrap(), 7);
    /// ```
    pub fn build(
        self,
        from: &dyn Reflect,
        to: &TypeInfo,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
        let expected = to.ty().path();
        let mismatch = || ConvertError::MismatchedOutput {
            expected,
            found: from.reflect_type_path(),
        };

        match self {
            Self::Identity => clone_of(from, expected).map(Some),
            Self::Numeric(a, b) => match a.load(from) {
                Some(number) => Ok(Some(b.store(number))),
                None => Err(mismatch()),
            },
            Self::NewtypeUnwrap => {
                let ReflectRef::TupleStruct(outer) = from.reflect_ref() else {
                    return Err(mismatch());
                };
                match outer.field(0) {
                    Some(inner) => clone_of(inner, expected).map(Some),
                    None => Err(mismatch()),
                }
            }
            Self::NewtypeWrap => {
                let Some(wrap) = to.as_tuple_struct().ok().and_then(|info| info.wrap_fn()) else {
                    return Ok(None);
                };
                wrap(clone_of(from, expected)?)
                    .map(Some)
                    .map_err(|value| ConvertError::MismatchedOutput {
                        expected,
                        found: value.reflect_type_path(),
                    })
            }
        }
    }
}

/// The `TypeId` wrapped by a single-field tuple struct.
fn newtype_of(info: &TypeInfo) -> Option<TypeId> {
    let info = info.as_tuple_struct().ok()?;
    Some(info.newtype_field()?.ty_id())
}

fn clone_of(value: &dyn Reflect, to: &'static str) -> Result<Box<dyn Reflect>, ConvertError> {
    value
        .reflect_clone()
        .map_err(|err| ConvertError::Conversion {
            from: value.reflect_type_path(),
            to,
            source: Box::new(err),
        })
}

fn assign(to: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), ConvertError> {
    let expected = to.reflect_type_path();
    to.set(value)
        .map_err(|value| ConvertError::MismatchedOutput {
            expected,
            found: value.reflect_type_path(),
        })
}

// -----------------------------------------------------------------------------
// Numeric

/// Primitive number types taking part in widening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Signed,
    Unsigned,
    Float,
}

/// A number read from a source value, wide enough for any primitive.
#[derive(Clone, Copy)]
enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

macro_rules! numeric_table {
    (@load Signed $v:ident) => { Number::Signed(*$v as i128) };
    (@load Unsigned $v:ident) => { Number::Unsigned(*$v as u128) };
    (@load Float $v:ident) => { Number::Float(*$v as f64) };
    ($($variant:ident => $ty:ty, $class:ident, $bits:expr;)*) => {
        impl Numeric {
            /// The numeric type with this `TypeId`, if any.
            pub fn of(type_id: TypeId) -> Option<Self> {
                $(
                    if type_id == TypeId::of::<$ty>() {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            /// Width in bits, `usize` and `isize` use the target's pointer width.
            pub const fn bits(self) -> u32 {
                match self {
                    $(Self::$variant => $bits,)*
                }
            }

            const fn class(self) -> Class {
                match self {
                    $(Self::$variant => Class::$class,)*
                }
            }

            fn load(self, value: &dyn Reflect) -> Option<Number> {
                match self {
                    $(Self::$variant => value.downcast_ref::<$ty>().map(|v| numeric_table!(@load $class v)),)*
                }
            }

            fn store(self, number: Number) -> Box<dyn Reflect> {
                match self {
                    $(Self::$variant => Box::new(match number {
                        Number::Signed(v) => v as $ty,
                        Number::Unsigned(v) => v as $ty,
                        Number::Float(v) => v as $ty,
                    }),)*
                }
            }
        }
    };
}

numeric_table! {
    I8 => i8, Signed, 8;
    I16 => i16, Signed, 16;
    I32 => i32, Signed, 32;
    I64 => i64, Signed, 64;
    I128 => i128, Signed, 128;
    Isize => isize, Signed, isize::BITS;
    U8 => u8, Unsigned, 8;
    U16 => u16, Unsigned, 16;
    U32 => u32, Unsigned, 32;
    U64 => u64, Unsigned, 64;
    U128 => u128, Unsigned, 128;
    Usize => usize, Unsigned, usize::BITS;
    F32 => f32, Float, 32;
    F64 => f64, Float, 64;
}

impl Numeric {
    /// Returns `true` if every value of `self` is exactly representable in `to`.
    ///
    /// - signed to wider signed, unsigned to wider unsigned
    /// - unsigned to strictly wider signed
    /// - integers of at most 16 bits to `f32`, at most 32 bits to `f64`
    /// - `f32` to `f64`
    ///
    /// Types of equal width never widen, so `usize` to `u64` is rejected
    /// even on 64-bit targets.
    ///
    /// ```
    /// use vc_convert::Numeric;
    ///
    /// assert!(Numeric::U8.widens_to(Numeric::F32));
    /// assert!(Numeric::U32.widens_to(Numeric::I64));
    /// assert!(!Numeric::U32.widens_to(Numeric::I32));
    /// assert!(!Numeric::I64.widens_to(Numeric::F64));
    /// ```
    pub const fn widens_to(self, to: Numeric) -> bool {
        let (from_bits, to_bits) = (self.bits(), to.bits());
        match (self.class(), to.class()) {
            (Class::Signed | Class::Unsigned, Class::Signed) | (Class::Unsigned, Class::Unsigned) => {
                from_bits < to_bits
            }
            (Class::Signed | Class::Unsigned, Class::Float) => match to {
                Numeric::F32 => from_bits <= 16,
                _ => from_bits <= 32,
            },
            (Class::Float, Class::Float) => from_bits < to_bits,
            (Class::Float, _) | (Class::Signed, Class::Unsigned) => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Coercion, Numeric};
    use alloc::string::String;
    use vc_reflect::info::Typed;

    #[test]
    fn widening_table() {
        assert!(Numeric::I8.widens_to(Numeric::I16));
        assert!(Numeric::U16.widens_to(Numeric::U64));
        assert!(Numeric::U8.widens_to(Numeric::I16));
        assert!(Numeric::I32.widens_to(Numeric::F64));
        assert!(Numeric::F32.widens_to(Numeric::F64));

        assert!(!Numeric::I16.widens_to(Numeric::I16));
        assert!(!Numeric::I8.widens_to(Numeric::U64));
        assert!(!Numeric::U16.widens_to(Numeric::I16));
        assert!(!Numeric::I32.widens_to(Numeric::F32));
        assert!(!Numeric::F64.widens_to(Numeric::F32));
        assert!(!Numeric::F32.widens_to(Numeric::I64));
    }

    #[test]
    fn pointer_width_types() {
        assert_eq!(Numeric::Usize.bits(), usize::BITS);
        assert!(Numeric::U8.widens_to(Numeric::Usize));
        assert!(!Numeric::Usize.widens_to(Numeric::U8));
    }

    #[test]
    fn numeric_apply() {
        let coercion = Coercion::between(u8::type_info(), f32::type_info()).unwrap();

        let mut to = 0.0_f32;
        coercion.apply(&200_u8, &mut to).unwrap();
        assert_eq!(to, 200.0);

        let coercion = Coercion::between(i16::type_info(), i64::type_info()).unwrap();
        let mut to = 0_i64;
        coercion.apply(&-7_i16, &mut to).unwrap();
        assert_eq!(to, -7);
    }

    #[test]
    fn identity_clones() {
        let coercion = Coercion::between(String::type_info(), String::type_info());
        assert_eq!(coercion, Some(Coercion::Identity));

        let from = String::from("value");
        let mut to = String::new();
        Coercion::Identity.apply(&from, &mut to).unwrap();
        assert_eq!(to, "value");
    }

    #[test]
    fn build_without_destination() {
        let value = Coercion::Identity
            .build(&String::from("v"), String::type_info())
            .unwrap()
            .unwrap();
        assert_eq!(value.take::<String>().unwrap(), "v");

        let value = Coercion::Numeric(Numeric::I8, Numeric::F64)
            .build(&-2_i8, f64::type_info())
            .unwrap()
            .unwrap();
        assert_eq!(value.take::<f64>().unwrap(), -2.0);

        let err = Coercion::Numeric(Numeric::I8, Numeric::F64)
            .build(&1_u8, f64::type_info())
            .unwrap_err();
        assert!(matches!(err, crate::ConvertError::MismatchedOutput { .. }));
    }

    #[test]
    fn mismatched_apply_is_an_error() {
        let mut to = 0_i64;
        let err = Coercion::Numeric(Numeric::I8, Numeric::I64)
            .apply(&1_u8, &mut to)
            .unwrap_err();
        assert!(matches!(err, crate::ConvertError::MismatchedOutput { .. }));
        assert_eq!(to, 0);
    }
}
