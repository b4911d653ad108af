//! Aggregate queries over a grid. Each of these is defined on the flattened
//! cell sequence: the cells of row 0 left to right, then row 1, and so on.
//! The representation stores exactly that sequence, so these delegate to the
//! 1D slice operations directly; the definition covers jagged grids, empty
//! rows, and the zero-row grid without special cases.

use crate::grid::Grid;

impl<T> Grid<T> {
    /// Left fold over the flattened cell sequence.
    pub fn fold<A, F: FnMut(A, &T) -> A>(&self, init: A, f: F) -> A {
        self.all_cells().iter().fold(init, f)
    }

    /// Right fold over the flattened cell sequence: the last cell of the last
    /// row is combined with the accumulator first.
    pub fn rfold<A, F: FnMut(A, &T) -> A>(&self, init: A, f: F) -> A {
        self.all_cells().iter().rfold(init, f)
    }

    /// Returns the first cell, in flattened order, satisfying `pred`.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.all_cells().iter().find(|&cell| pred(cell))
    }

    /// Returns the last cell, in flattened order, satisfying `pred`.
    pub fn rfind<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.all_cells().iter().rfind(|&cell| pred(cell))
    }

    /// True if some cell equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.all_cells().contains(value)
    }

    /// True if some cell satisfies `pred`. Stops at the first match; false
    /// for a grid with no cells.
    pub fn any<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.all_cells().iter().any(pred)
    }

    /// True if every cell satisfies `pred`. Stops at the first counterexample;
    /// vacuously true for a grid with no cells.
    pub fn all<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.all_cells().iter().all(pred)
    }

    /// Returns the smallest cell, or None if the grid has no cells. Among
    /// equal minima the first in flattened order is returned.
    pub fn minimum(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.all_cells().iter().min()
    }

    /// Returns the largest cell, or None if the grid has no cells. Among
    /// equal maxima the last in flattened order is returned.
    pub fn maximum(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.all_cells().iter().max()
    }
}
