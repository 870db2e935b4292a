//! Subtraits of [`Reflect`] for data access, one per [`ReflectKind`].
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`).
//! - [`TupleStruct`]: For tuple-struct (e.g. `A(..)`).
//! - [`List`]: For list-like (e.g. `Vec<i32>`).
//! - [`Optional`]: For optional values (e.g. `Option<i32>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] are the results of casting a
//! `dyn Reflect` to one of them.
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod kind;
mod list_ops;
mod optional_ops;
mod struct_ops;
mod tuple_struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use optional_ops::Optional;
pub use struct_ops::{Struct, StructFieldIter};
pub use tuple_struct_ops::TupleStruct;
