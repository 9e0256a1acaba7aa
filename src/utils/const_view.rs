use crate::utils::Cursor;
use std::iter::Take;

/// Iterators that only hand out shared references.
#[diagnostic::on_unimplemented(
    message = "ConstView can be constructed from const iterators only",
    label = "`{Self}` does not yield shared references or cannot be cloned"
)]
pub trait ConstIterator: Iterator + Clone {
    type Target: ?Sized;
}

impl<'a, T: ?Sized + 'a, I> ConstIterator for I
where
    I: Iterator<Item = &'a T> + Clone,
{
    type Target = T;
}

/// A read-only window `[begin, end)` over someone else's elements.
///
/// ```compile_fail
/// use fosg::utils::ConstView;
///
/// let mut board = [1, 2, 3];
/// let (a, b) = board.split_at_mut(1);
/// let _ = ConstView::new(a.iter_mut(), b.iter_mut());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstView<I: ConstIterator> {
    begin: I,
    end: I,
}

impl<I: ConstIterator> ConstView<I> {
    pub fn new(begin: I, end: I) -> Self {
        Self { begin, end }
    }

    pub fn begin(&self) -> I {
        self.begin.clone()
    }

    pub fn end(&self) -> I {
        self.end.clone()
    }
}

impl<I: ConstIterator + ExactSizeIterator> ConstView<I> {
    /// Number of elements between `begin` and `end`; zero if `end` lies before `begin`.
    pub fn len(&self) -> usize {
        self.begin.len().saturating_sub(self.end.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Take<I> {
        self.begin().take(self.len())
    }
}

impl<'a, T> ConstView<Cursor<'a, T>> {
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::new(Cursor::new(slice), Cursor::end(slice))
    }

    pub fn first(&self) -> Option<&'a T> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.iter().last()
    }
}

impl<I: ConstIterator + ExactSizeIterator> IntoIterator for ConstView<I> {
    type Item = I::Item;
    type IntoIter = Take<I>;

    fn into_iter(self) -> Take<I> {
        self.iter()
    }
}

impl<I: ConstIterator + ExactSizeIterator> IntoIterator for &ConstView<I> {
    type Item = I::Item;
    type IntoIter = Take<I>;

    fn into_iter(self) -> Take<I> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::utils::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(std::slice::Iter<'static, u8>: ConstIterator);
    assert_impl_all!(Cursor<'static, String>: ConstIterator);
    assert_impl_all!(std::collections::btree_map::Keys<'static, u8, u8>: ConstIterator);
    assert_not_impl_any!(std::slice::IterMut<'static, u8>: ConstIterator);
    assert_not_impl_any!(std::vec::IntoIter<u8>: ConstIterator);

    #[test]
    fn iterates_begin_to_end() {
        let board = vec!["a", "b", "c", "d", "e"];
        let view = ConstView::new(Cursor::at(&board, 1), Cursor::at(&board, 4));
        assert_eq!(view.len(), 3);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), ["b", "c", "d"]);
        assert_eq!(view.begin(), Cursor::at(&board, 1));
        assert_eq!(view.end(), Cursor::at(&board, 4));
    }

    #[test]
    fn full_slice_view() {
        let board = [3, 1, 4];
        let view = ConstView::from_slice(&board);
        assert_eq!(view.first(), Some(&3));
        assert_eq!(view.last(), Some(&4));
        let mut sum = 0;
        for x in &view {
            sum += x;
        }
        assert_eq!(sum, 8);
    }

    #[test]
    fn slice_iterators_bound_a_view() {
        let board = [5, 6, 7, 8];
        let view = ConstView::new(board.iter(), advance(board.iter(), 3));
        assert_eq!(view.into_iter().copied().collect::<Vec<_>>(), [5, 6, 7]);
    }

    #[test]
    fn empty_and_inverted_views() {
        let board = [1, 2];
        let empty = ConstView::new(Cursor::end(&board), Cursor::end(&board));
        assert!(empty.is_empty());
        let inverted = ConstView::new(Cursor::end(&board), Cursor::new(&board));
        assert_eq!(inverted.iter().count(), 0);
    }
}
