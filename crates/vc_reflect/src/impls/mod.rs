//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`default_of`]: A [`DefaultFn`] for any `Reflect + Default` type.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char`
//! - `String`, `Vec<T>`, `Option<T>`
//! - `core::time::Duration`, `std::time::SystemTime`
//!
//! [`DefaultFn`]: crate::info::DefaultFn
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;

mod native;
mod option;
mod time;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use debug::{list_debug, optional_debug, struct_debug, tuple_struct_debug};

use ::alloc::boxed::Box;

use crate::Reflect;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

/// Boxes the [`Default`] value of `T`.
///
/// Coerces to [`DefaultFn`](crate::info::DefaultFn).
///
/// ```
/// use vc_reflect::impls::default_of;
///
/// let value = default_of::<u16>();
/// assert_eq!(value.take::<u16>().unwrap(), 0);
/// ```
#[inline]
pub fn default_of<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}
