use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [the derive macro].
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, ReflectKind}};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let info = Point::type_info();
/// assert_eq!(info.kind(), ReflectKind::Struct);
/// assert_eq!(info.as_struct().unwrap().field_names(), &["x", "y"]);
/// ```
///
/// [the derive macro]: crate::derive::Reflect
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Auto implemented for all types that implement [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
