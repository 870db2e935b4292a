//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` paired with a [`TypePathTable`].
//! - [`TypeInfo`]: A enum of the per-kind infos:
//!     - [`StructInfo`]: field names in declaration order and [`NamedField`]s.
//!     - [`TupleStructInfo`]: [`UnnamedField`]s, used for newtypes.
//!     - [`ListInfo`]: item type info, e.g. `Vec<T>`.
//!     - [`OptionalInfo`]: inner type info, e.g. `Option<T>`.
//!     - [`OpaqueInfo`]: values without visible structure, e.g. `String`, `u32`.
//! - [`Typed`]: A trait for obtaining static `TypeInfo`.
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.
//!
//! Every info may carry a default constructor, see [`TypeInfo::default_value`].

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod opaque_info;
mod optional_info;
mod struct_info;
mod tuple_struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{NamedField, UnnamedField};
pub use list_info::ListInfo;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use struct_info::StructInfo;
pub use tuple_struct_info::TupleStructInfo;
pub use type_info::{DefaultFn, ReflectKind, ReflectKindError, TypeInfo, WrapFn};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};

// -----------------------------------------------------------------------------
// Auxiliary macro

// Implements `with_default` and `default_fn` for an info holding `default: Option<DefaultFn>`.
macro_rules! impl_default_fn {
    ($field:ident) => {
        /// Attaches a constructor for the default value of this type.
        #[inline]
        pub fn with_default(self, $field: $crate::info::DefaultFn) -> Self {
            Self {
                $field: Some($field),
                ..self
            }
        }

        /// Returns the default constructor, if the type has one.
        #[inline]
        pub const fn default_fn(&self) -> Option<$crate::info::DefaultFn> {
            self.$field
        }
    };
}

pub(crate) use impl_default_fn;
