use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// A read-only position inside a slice. Unlike `slice::Iter` it can also move backwards.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Clamped to the end of the slice.
    pub fn at(slice: &'a [T], pos: usize) -> Self {
        Self {
            slice,
            pos: pos.min(slice.len()),
        }
    }

    pub fn end(slice: &'a [T]) -> Self {
        Self::at(slice, slice.len())
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    pub(crate) fn shift(self, n: isize) -> Self {
        let pos = (self.pos as isize).saturating_add(n);
        Self::at(self.slice, pos.max(0) as usize)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cursor({}/{})", self.pos, self.slice.len())
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.slice.len() - self.pos;
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
impl<T> FusedIterator for Cursor<'_, T> {}

#[cfg(test)]
mod test {
    use crate::utils::cursor::*;

    #[test]
    fn walks_forward_and_stops() {
        let cards = [2, 3, 4];
        let mut cursor = Cursor::new(&cards[..]);
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.peek(), Some(&3));
        assert_eq!(cursor.by_ref().count(), 2);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor, Cursor::end(&cards[..]));
    }

    #[test]
    fn shift_clamps_to_bounds() {
        let cards = [1, 2, 3, 4];
        let mid = Cursor::at(&cards[..], 2);
        assert_eq!(mid.shift(-5).position(), 0);
        assert_eq!(mid.shift(9).position(), 4);
        assert_eq!(mid.shift(-1).peek(), Some(&2));
        assert_eq!(Cursor::at(&cards[..], 10).position(), 4);
    }

    #[test]
    fn cursors_into_different_slices_differ() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(Cursor::new(&a[..]), Cursor::new(&b[..]));
    }
}
