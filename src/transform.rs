//! Element-wise transforms. Every operation here returns a new grid with the
//! same number of rows as its input; `map` and `indexed_map` also keep every
//! row's length, while `filter` and `filter_map` may shrink rows (possibly
//! to empty) but never drop or reorder them.

use crate::grid::Grid;

impl<T> Grid<T> {
    /// Returns a grid of the same shape where every cell is replaced by
    /// `f(cell)`.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            index: self.index.clone(),
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// As `map`, but `f` also receives the cell's `(x, y)` coordinates.
    pub fn indexed_map<U, F: FnMut(usize, usize, &T) -> U>(&self, mut f: F) -> Grid<U> {
        let mut cells = Vec::with_capacity(self.num_cells());
        for (y, row) in self.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                cells.push(f(x, y, cell));
            }
        }
        Grid {
            index: self.index.clone(),
            cells,
        }
    }

    /// Returns a grid with the same rows, where each row keeps only the cells
    /// satisfying `pred`, in their original order. A row whose cells are all
    /// rejected remains in the result as an empty row.
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Grid<T>
    where
        T: Clone,
    {
        let mut index = Vec::with_capacity(self.index.len());
        index.push(0);
        let mut cells = Vec::new();
        for row in self.rows() {
            for cell in row.iter() {
                if pred(cell) {
                    cells.push(cell.clone());
                }
            }
            index.push(cells.len() as u32);
        }
        Grid { index, cells }
    }

    /// Like `filter`, but `f` decides per cell whether to keep a transformed
    /// value (`Some`) or discard the cell (`None`). Rows are preserved the
    /// same way as in `filter`.
    pub fn filter_map<U, F: FnMut(&T) -> Option<U>>(&self, mut f: F) -> Grid<U> {
        let mut index = Vec::with_capacity(self.index.len());
        index.push(0);
        let mut cells = Vec::new();
        for row in self.rows() {
            for cell in row.iter() {
                if let Some(mapped) = f(cell) {
                    cells.push(mapped);
                }
            }
            index.push(cells.len() as u32);
        }
        Grid { index, cells }
    }
}
