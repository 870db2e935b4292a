//! Copy values between reflected types.
//!
//! [`ConvertRegistry::convert`] copies every field of a source struct into the
//! destination field of the same name. Fields can be redirected with
//! `#[convert(rename = "..")]` and protected with `#[convert(readonly)]`.
//!
//! For each field the value is transferred by the first rule that applies:
//!
//! 1. An `Option` destination takes `None` from a `None` source, otherwise its
//!    pointee is allocated when missing and the copy continues into it.
//! 2. A [`Coercion`] between the two types: identical types, lossless numeric
//!    widening, newtype wrapping or unwrapping.
//! 3. An `Option` source is unwrapped and the transfer retried.
//! 4. A converter registered for the exact `(source, destination)` pair.
//!
//! When nothing applies the field is left untouched. A `Vec` source is copied
//! element by element into a `Vec` destination, appending to what it holds.
//!
//! # Example
//!
//! ```
//! use vc_convert::ConvertRegistry;
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Record {
//!     #[convert(rename = "total")]
//!     count: String,
//!     label: Option<String>,
//! }
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Summary {
//!     total: i32,
//!     label: String,
//! }
//!
//! let mut registry = ConvertRegistry::new();
//! registry.register(|s: &String| s.parse::<i32>());
//!
//! let record = Record { count: "42".into(), label: Some("answer".into()) };
//! let mut summary = Summary::default();
//! registry.convert(&record, &mut summary).unwrap();
//!
//! assert_eq!(summary, Summary { total: 42, label: "answer".into() });
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod engine;
mod error;
mod registry;

#[cfg(feature = "auto_register")]
mod auto_register;

#[cfg(test)]
mod tests;

#[cfg(feature = "auto_register")]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Exports

pub use coerce::{Coercion, Numeric};
pub use error::{BoxError, ConvertError, SourceMismatch};
pub use registry::{ConvertFn, ConvertRegistry, ConvertRegistryArc};

use vc_reflect::Reflect;

/// Copies `from` into `to` using the converters of `registry`.
///
/// Same as [`ConvertRegistry::convert`].
#[inline]
pub fn convert(
    registry: &ConvertRegistry,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Result<(), ConvertError> {
    engine::convert(registry, from, to)
}
