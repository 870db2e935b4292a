use crate::Reflect;

/// A trait used to power [tuple struct-like] operations via reflection.
///
/// Single-field tuple structs are newtypes to the copy engine.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::TupleStruct};
///
/// #[derive(Reflect)]
/// struct Meters(f64);
///
/// let mut m = Meters(1.5);
/// *m.field_mut(0).unwrap().downcast_mut::<f64>().unwrap() = 2.0;
///
/// assert_eq!(m.field_len(), 1);
/// assert_eq!(m.0, 2.0);
/// ```
///
/// [tuple struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html#using-tuple-structs-without-named-fields-to-create-different-types
pub trait TupleStruct: Reflect {
    /// Returns the field at `index`, or `None` if out of bounds.
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably, or `None` if out of bounds.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}
