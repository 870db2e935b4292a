use alloc::boxed::Box;
use core::time::Duration;
use std::time::SystemTime;

use crate::Reflect;
use crate::impls::native::impl_opaque_reflect;
use crate::impls::{NonGenericTypeInfoCell, default_of};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;

impl_opaque_reflect!(Duration => "Duration" in "core::time", default);
// `SystemTime` has no meaningful default, so optional targets of it are not allocated.
impl_opaque_reflect!(SystemTime => "SystemTime" in "std::time");

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};
    use std::time::SystemTime;

    #[test]
    fn system_time_has_no_default() {
        let info = <SystemTime as Typed>::type_info();

        assert_eq!(<SystemTime as TypePath>::type_path(), "std::time::SystemTime");
        assert!(info.default_fn().is_none());
    }
}
