use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vc_reflect::Reflect;
use vc_reflect::info::TypePath;
use vc_utils::TypePairMap;

use crate::{BoxError, ConvertError, SourceMismatch};

/// A type-erased converter.
///
/// Receives the source value and returns a boxed value of the destination type.
pub type ConvertFn =
    Box<dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, BoxError> + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// ConvertRegistry

/// Converters keyed by `(source type, destination type)`.
///
/// The registry is an explicit value passed to every copy; nothing is
/// looked up from global state. At most one converter exists per pair,
/// the last registration wins and nothing can be removed.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use vc_convert::ConvertRegistry;
///
/// let mut registry = ConvertRegistry::new();
/// registry.register(|value: &String| value.parse::<u16>());
///
/// assert!(registry.contains(TypeId::of::<String>(), TypeId::of::<u16>()));
/// assert!(!registry.contains(TypeId::of::<u16>(), TypeId::of::<String>()));
///
/// let convert = registry.get(TypeId::of::<String>(), TypeId::of::<u16>()).unwrap();
/// let output = convert(&String::from("8080")).unwrap();
/// assert_eq!(output.take::<u16>().unwrap(), 8080);
/// ```
pub struct ConvertRegistry {
    converters: TypePairMap<ConvertFn>,
    auto_registered: bool,
}

impl Default for ConvertRegistry {
    /// See [`ConvertRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            converters: TypePairMap::new(),
            auto_registered: false,
        }
    }

    /// Registers `func` as the converter from `F` to `T`.
    ///
    /// Replaces any converter registered for the same pair. The source is
    /// downcast before `func` is called, a source of another type is
    /// reported as a [`SourceMismatch`] instead of a panic.
    pub fn register<F, T, E>(&mut self, func: impl Fn(&F) -> Result<T, E> + Send + Sync + 'static)
    where
        F: Reflect + TypePath,
        T: Reflect,
        E: Into<BoxError>,
    {
        let erased: ConvertFn = Box::new(move |from: &dyn Reflect| {
            let Some(from) = from.downcast_ref::<F>() else {
                return Err(Box::new(SourceMismatch {
                    expected: F::type_path(),
                    found: from.reflect_type_path(),
                }) as BoxError);
            };
            match func(from) {
                Ok(value) => Ok(Box::new(value) as Box<dyn Reflect>),
                Err(err) => Err(err.into()),
            }
        });

        self.register_dyn(TypeId::of::<F>(), TypeId::of::<T>(), erased);
    }

    /// Registers a type-erased converter for `(from, to)`.
    ///
    /// Returns the replaced converter, if any. The output type of `func`
    /// is not checked here; a wrong output makes the copy fail with
    /// [`ConvertError::MismatchedOutput`].
    pub fn register_dyn(&mut self, from: TypeId, to: TypeId, func: ConvertFn) -> Option<ConvertFn> {
        let old = self.converters.insert(from, to, func);
        log::trace!("registered converter {from:?} -> {to:?}");
        old
    }

    /// Returns the converter registered for `(from, to)`.
    #[inline]
    pub fn get(&self, from: TypeId, to: TypeId) -> Option<&ConvertFn> {
        self.converters.get(from, to)
    }

    /// Returns `true` if a converter is registered for `(from, to)`.
    #[inline]
    pub fn contains(&self, from: TypeId, to: TypeId) -> bool {
        self.converters.contains(from, to)
    }

    /// Returns the number of registered converters.
    #[inline]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns `true` if no converter is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Copies `from` into `to`.
    ///
    /// `to` must be a struct or a list, possibly behind `Option`s that hold a
    /// value. See the [crate-level documentation](crate) for the transfer rules.
    ///
    /// # Errors
    ///
    /// See [`ConvertError`]. Fields copied before the error keep their new value.
    #[inline]
    pub fn convert(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), ConvertError> {
        crate::engine::convert(self, from, to)
    }

    /// Registers every converter declared with [`auto_register!`](crate::auto_register!).
    ///
    /// Repeated calls do nothing. Converters registered by hand before the
    /// first call are replaced if an auto registered one has the same pair.
    ///
    /// Returns `true` if automatic registration is available, which requires
    /// the `auto_register` feature and a platform supported by `inventory`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::auto_register::register_all(self);
                self.auto_registered = true;
            }
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}

impl fmt::Debug for ConvertRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertRegistry")
            .field("len", &self.len())
            .field("auto_registered", &self.auto_registered)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConvertRegistryArc

/// A [`ConvertRegistry`] shared between threads.
///
/// Lock poisoning is ignored, every mutation is a single insert.
///
/// ```
/// use vc_convert::ConvertRegistryArc;
///
/// let shared = ConvertRegistryArc::default();
/// let other = shared.clone();
///
/// other.write().register(|v: &u64| u32::try_from(*v));
/// assert_eq!(shared.read().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct ConvertRegistryArc {
    /// The wrapped [`ConvertRegistry`].
    pub internal: Arc<RwLock<ConvertRegistry>>,
}

impl ConvertRegistryArc {
    /// Wraps an existing registry.
    pub fn new(registry: ConvertRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`ConvertRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, ConvertRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`ConvertRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, ConvertRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies `from` into `to` under a read lock.
    pub fn convert(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), ConvertError> {
        self.read().convert(from, to)
    }
}

impl fmt::Debug for ConvertRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ConvertFn, ConvertRegistry};
    use crate::SourceMismatch;
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use core::any::TypeId;
    use vc_reflect::Reflect;

    #[test]
    fn last_registration_wins() {
        let mut registry = ConvertRegistry::new();
        registry.register(|_: &String| Ok::<_, SourceMismatch>(1_i32));
        registry.register(|_: &String| Ok::<_, SourceMismatch>(2_i32));
        assert_eq!(registry.len(), 1);

        let convert = registry
            .get(TypeId::of::<String>(), TypeId::of::<i32>())
            .unwrap();
        let output = convert(&String::new()).unwrap();
        assert_eq!(output.take::<i32>().unwrap(), 2);
    }

    #[test]
    fn register_dyn_returns_previous() {
        let mut registry = ConvertRegistry::new();
        let (from, to) = (TypeId::of::<u8>(), TypeId::of::<String>());
        let make = || -> ConvertFn { Box::new(|_: &dyn Reflect| Ok(Box::new(String::new()) as Box<dyn Reflect>)) };

        assert!(registry.register_dyn(from, to, make()).is_none());
        assert!(registry.register_dyn(from, to, make()).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn typed_converter_rejects_other_sources() {
        let mut registry = ConvertRegistry::new();
        registry.register(|v: &u8| Ok::<_, SourceMismatch>(v.to_string()));

        let convert = registry
            .get(TypeId::of::<u8>(), TypeId::of::<String>())
            .unwrap();
        let err = convert(&7_i64).unwrap_err();
        assert_eq!(err.to_string(), "converter expected `u8`, found `i64`");
    }

    #[test]
    fn auto_register_is_idempotent() {
        let mut registry = ConvertRegistry::new();
        let first = registry.auto_register();
        let len = registry.len();
        assert_eq!(registry.auto_register(), first);
        assert_eq!(registry.len(), len);
    }
}
