use crate::grid::Grid;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds a grid from borrowed rows; the rows may have different lengths.
pub fn grid_of_rows<T: Clone>(rows: &[&[T]]) -> Grid<T> {
    Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect())
}
