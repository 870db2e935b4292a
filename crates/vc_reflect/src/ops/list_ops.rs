use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via reflection.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<u32> = vec![1, 2];
///
/// List::push(&mut list, 3_u32.into_boxed_reflect()).unwrap();
/// assert!(List::push(&mut list, 4_u8.into_boxed_reflect()).is_err());
///
/// assert_eq!(List::len(&list), 3);
/// assert_eq!(list, vec![1, 2, 3]);
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element to the back of the list.
    ///
    /// Returns `value` back if its type is not the element type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes the last element and returns it, or `None` if empty.
    fn pop(&mut self) -> Option<Box<dyn Reflect>>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a list.
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new [`ListItemIter`].
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
