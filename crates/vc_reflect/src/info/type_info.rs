use alloc::boxed::Box;
use core::{error, fmt};

use crate::Reflect;
use crate::info::{ListInfo, OpaqueInfo, OptionalInfo, StructInfo, TupleStructInfo, Type};

/// A constructor of a type's default value.
pub type DefaultFn = fn() -> Box<dyn Reflect>;

/// Builds a newtype from a boxed value of its field type.
///
/// A value of another type is handed back unchanged.
pub type WrapFn = fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait,
/// such as [`Struct`] or [`List`], see [`ReflectRef`].
///
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`ReflectRef`]: crate::ops::ReflectRef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    TupleStruct,
    List,
    Optional,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::TupleStruct => f.pad("TupleStruct"),
            Self::List => f.pad("List"),
            Self::Optional => f.pad("Optional"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a kind cast does not match the actual kind.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// Usually obtained from [`Typed::type_info`](crate::info::Typed::type_info)
/// or [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{Typed, ReflectKind};
///
/// let info = <Option<u8> as Typed>::type_info();
/// let optional = info.as_optional().unwrap();
///
/// assert_eq!(info.kind(), ReflectKind::Optional);
/// assert!(optional.some_info().type_is::<u8>());
/// assert!(info.as_list().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    TupleStruct(TupleStructInfo),
    List(ListInfo),
    Optional(OptionalInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Casts to [`", stringify!($info), "`], or returns a [`ReflectKindError`].")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_tuple_struct: TupleStruct => TupleStructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`Type`] of the underlying type.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::TupleStruct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::TupleStruct(_) => ReflectKind::TupleStruct,
            Self::List(_) => ReflectKind::List,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the default constructor, if the type has one.
    pub const fn default_fn(&self) -> Option<DefaultFn> {
        match self {
            Self::Struct(info) => info.default_fn(),
            Self::TupleStruct(info) => info.default_fn(),
            Self::List(info) => info.default_fn(),
            Self::Optional(info) => info.default_fn(),
            Self::Opaque(info) => info.default_fn(),
        }
    }

    /// Creates the default value of the type, if it has a default constructor.
    ///
    /// Lists and optionals always have one. Derived types get one with
    /// `#[reflect(default)]`.
    ///
    /// ```
    /// use vc_reflect::info::Typed;
    ///
    /// let value = <Vec<u8> as Typed>::type_info().default_value().unwrap();
    /// assert_eq!(value.take::<Vec<u8>>().unwrap(), Vec::<u8>::new());
    /// ```
    #[inline]
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        self.default_fn().map(|f| f())
    }
}
