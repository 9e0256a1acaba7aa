use crate::utils::Cursor;

/// Iterators that can be moved by a number of steps.
///
/// The step type decides which directions are possible: `slice::Iter` only moves forward
/// and takes a `usize`, so a negative step does not type-check.
pub trait Advance: Sized {
    type Difference;

    fn step(self, n: Self::Difference) -> Self;
}

/// Consumes `iter` and returns it moved by `n`. `advance(it, 0)` is `it`.
pub fn advance<I: Advance>(iter: I, n: I::Difference) -> I {
    iter.step(n)
}

impl<T> Advance for Cursor<'_, T> {
    type Difference = isize;

    fn step(self, n: isize) -> Self {
        self.shift(n)
    }
}

impl<T> Advance for std::slice::Iter<'_, T> {
    type Difference = usize;

    fn step(mut self, n: usize) -> Self {
        if n > 0 {
            self.nth(n - 1);
        }
        self
    }
}
