use core::any::TypeId;
use core::fmt::Debug;

use crate::TypeIdMap;

/// A two level map keyed by an ordered pair of types.
///
/// The outer level is keyed by the first (source) type, the inner level by
/// the second (target) type. `(A, B)` and `(B, A)` are distinct keys.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_utils::TypePairMap;
///
/// let mut map = TypePairMap::new();
/// map.insert(TypeId::of::<String>(), TypeId::of::<i64>(), "parse");
///
/// assert_eq!(map.get(TypeId::of::<String>(), TypeId::of::<i64>()), Some(&"parse"));
/// assert_eq!(map.get(TypeId::of::<i64>(), TypeId::of::<String>()), None);
/// ```
pub struct TypePairMap<V> {
    pairs: TypeIdMap<TypeIdMap<V>>,
    len: usize,
}

impl<V> TypePairMap<V> {
    /// Creates an empty `TypePairMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pairs: TypeIdMap::new(),
            len: 0,
        }
    }

    /// Inserts `value` for `(from, to)`, returning the replaced value if any.
    pub fn insert(&mut self, from: TypeId, to: TypeId, value: V) -> Option<V> {
        let old = self
            .pairs
            .get_or_insert(from, TypeIdMap::new)
            .insert(to, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Returns the value registered for `(from, to)`.
    #[inline]
    pub fn get(&self, from: TypeId, to: TypeId) -> Option<&V> {
        self.pairs.get(&from)?.get(&to)
    }

    /// Returns `true` if a value is registered for `(from, to)`.
    #[inline]
    pub fn contains(&self, from: TypeId, to: TypeId) -> bool {
        self.get(from, to).is_some()
    }

    /// Returns the number of registered pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no pair is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V> Default for TypePairMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypePairMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypePairMap")
            .field("len", &self.len)
            .field("pairs", &self.pairs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TypePairMap;
    use alloc::string::String;
    use core::any::TypeId;

    #[test]
    fn last_insert_wins() {
        let mut map = TypePairMap::new();
        let (a, b) = (TypeId::of::<String>(), TypeId::of::<i32>());

        assert_eq!(map.insert(a, b, 1), None);
        assert_eq!(map.insert(a, b, 2), Some(1));
        assert_eq!(map.get(a, b), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn pairs_are_ordered() {
        let mut map = TypePairMap::new();
        let (a, b) = (TypeId::of::<String>(), TypeId::of::<i32>());

        map.insert(a, b, ());
        assert!(map.contains(a, b));
        assert!(!map.contains(b, a));
        assert!(!map.contains(a, a));
    }
}
