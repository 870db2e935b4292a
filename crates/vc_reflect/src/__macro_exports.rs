//! Items used by code generated from `#[derive(Reflect)]`.
//!
//! Not part of the public API.

pub mod alloc_utils {
    pub use ::alloc::boxed::Box;
}

use alloc::borrow::Cow;

use crate::Reflect;
use crate::ops::ReflectCloneError;

/// Clone a single field through reflection, naming the field in the error.
#[inline(never)]
pub fn __reflect_clone_field<T: Reflect>(
    field: &T,
    type_path: &'static str,
    field_name: &'static str,
) -> Result<T, ReflectCloneError> {
    let not_cloneable = || ReflectCloneError::FieldNotCloneable {
        type_path: Cow::Borrowed(type_path),
        field: Cow::Borrowed(field_name),
    };

    let cloned = field.reflect_clone().map_err(|_| not_cloneable())?;
    cloned.take::<T>().map_err(|_| not_cloneable())
}
