use alloc::boxed::Box;

use thiserror::Error;

/// The error type returned by converter functions.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// An error that aborts a copy.
///
/// Fields written before the error stay written, nothing is rolled back.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The destination is not a present struct or list.
    #[error("cannot copy into `{type_path}`, expected a present struct or list")]
    Unaddressable { type_path: &'static str },
    /// The source is a list but the destination is not.
    #[error("cannot copy sequence `{from}` into non-sequence `{to}`")]
    SequenceToNonSequence {
        from: &'static str,
        to: &'static str,
    },
    /// A registered converter failed.
    #[error("conversion from `{from}` to `{to}` failed")]
    Conversion {
        from: &'static str,
        to: &'static str,
        #[source]
        source: BoxError,
    },
    /// A value of the wrong type was produced for the destination.
    #[error("expected a value of `{expected}`, found `{found}`")]
    MismatchedOutput {
        expected: &'static str,
        found: &'static str,
    },
    /// A list element cannot be created without a default value.
    #[error("`{type_path}` has no default value, add `#[reflect(default)]`")]
    NoDefault { type_path: &'static str },
}

/// A converter was called with a source of another type.
///
/// Only reachable through [`ConvertRegistry::register_dyn`] with mismatched
/// type ids, reported inside [`ConvertError::Conversion`].
///
/// [`ConvertRegistry::register_dyn`]: crate::ConvertRegistry::register_dyn
#[derive(Debug, Error)]
#[error("converter expected `{expected}`, found `{found}`")]
pub struct SourceMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}
