use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via reflection.
///
/// This trait uses the [`Reflect`] trait to allow implementors to have their
/// fields be dynamically addressed by both name and index.
///
/// When using [the derive macro] on a standard struct, this trait
/// will be automatically implemented.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field = foo.field("bar").unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [the derive macro]: crate::derive::Reflect
pub trait Struct: Reflect {
    /// Returns the field named `name`, or `None` if it does not exist.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, or `None` if it does not exist.
    ///
    /// ```
    /// # use vc_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: bool };
    ///
    /// let mut ts = Foo{ a: 1, b: true };
    ///
    /// if let Some(field) = ts.field_mut("a") {
    ///     *field.downcast_mut::<i32>().unwrap() = 42;
    /// }
    ///
    /// assert_eq!(ts.a, 42);
    /// ```
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`, or `None` if out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably, or `None` if out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the struct's fields,
    /// in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    structure: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            structure: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.structure.name_at(self.index)?;
        let value = self.structure.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.structure.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}
