use alloc::borrow::Cow;
use core::fmt;

/// An error that occurs when cloning a type via [`Reflect::reflect_clone`].
///
/// [`Reflect::reflect_clone`]: crate::Reflect::reflect_clone
#[derive(Debug)]
pub enum ReflectCloneError {
    /// The type does not support `reflect_clone`.
    NotSupport { type_path: Cow<'static, str> },
    /// A field of the type could not be cloned.
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "`reflect_clone` not support for `{type_path}`")
            }
            Self::FieldNotCloneable { type_path, field } => {
                write!(
                    f,
                    "field `{type_path}::{field}` cannot be made cloneable for `reflect_clone`"
                )
            }
        }
    }
}

impl core::error::Error for ReflectCloneError {}
