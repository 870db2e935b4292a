#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `vc_reflect`, so the crate must be able to name itself.
extern crate self as vc_reflect;

// -----------------------------------------------------------------------------
// no_std support

// Type info cells need `OnceLock` and `RwLock`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

#[cfg(test)]
mod tests;

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
