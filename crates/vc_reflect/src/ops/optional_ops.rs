use alloc::boxed::Box;

use crate::Reflect;

/// A trait used to power optional value operations via reflection.
///
/// An optional is the copy engine's pointer: it is either absent,
/// or refers to exactly one inner value.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::Optional};
///
/// let mut opt: Option<i32> = None;
/// assert!(!opt.is_some());
///
/// let inner = opt.insert_value(7_i32.into_boxed_reflect()).unwrap();
/// *inner.downcast_mut::<i32>().unwrap() += 1;
///
/// assert_eq!(opt, Some(8));
///
/// opt.clear();
/// assert_eq!(opt, None);
/// ```
pub trait Optional: Reflect {
    /// Returns the inner value, or `None` if absent.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the inner value mutably, or `None` if absent.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Replaces the inner value with `value` and returns it mutably.
    ///
    /// Returns `value` back if its type is not the inner type.
    fn insert_value(&mut self, value: Box<dyn Reflect>) -> Result<&mut dyn Reflect, Box<dyn Reflect>>;

    /// Makes the value absent.
    fn clear(&mut self);

    /// Returns `true` if the inner value is present.
    #[inline]
    fn is_some(&self) -> bool {
        self.value().is_some()
    }
}
