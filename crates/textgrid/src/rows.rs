//! Rectangular matrix of cells.
//!
//! [`Rows`] is the grid every table is built on. It can only be created
//! through validating constructors, so every row is guaranteed to have the
//! same number of columns and the traversal helpers never have to re-check.
//!
//! ```rust
//! use textgrid::Rows;
//!
//! let rows = Rows::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! assert_eq!(rows.column_count(), 2);
//! assert_eq!(rows.transpose().into_rows(), vec![vec![1, 3], vec![2, 4]]);
//! ```

use crate::error::RowsError;

/// An immutable grid whose rows all have the same length.
///
/// Cells are stored row-major in a flat vector alongside the column count,
/// which makes a ragged state unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rows<T> {
    cells: Vec<T>,
    columns: usize,
    rows: usize,
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Rows {
            cells: Vec::new(),
            columns: 0,
            rows: 0,
        }
    }
}

impl<T> Rows<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// Rows are scanned in order; the first row whose length differs from
    /// the first row's length is reported.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RowsError> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(columns * row_count);

        for row in rows {
            if row.len() != columns {
                return Err(RowsError::InconsistentLengths {
                    expected: columns,
                    got: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Rows {
            cells,
            columns,
            rows: row_count,
        })
    }

    /// Builds a matrix from a list of columns.
    ///
    /// Columns shorter than the longest one are padded at the bottom with
    /// values from `fill`, so the result is always rectangular.
    ///
    /// ```rust
    /// use textgrid::Rows;
    ///
    /// let rows = Rows::from_columns(vec![vec![1, 2], vec![3]], || 0);
    /// assert_eq!(rows.into_rows(), vec![vec![1, 3], vec![2, 0]]);
    /// ```
    pub fn from_columns<F>(columns: Vec<Vec<T>>, mut fill: F) -> Rows<T>
    where
        F: FnMut() -> T,
    {
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let width = columns.len();
        let mut cells = Vec::with_capacity(height * width);
        for mut column in columns {
            column.resize_with(height, &mut fill);
            cells.extend(column);
        }

        Rows {
            cells,
            columns: height,
            rows: width,
        }
        .transpose()
    }

    /// Extracts the rows, preserving order.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let columns = self.columns;
        let row_count = self.rows;
        let mut cells = self.cells.into_iter();
        (0..row_count)
            .map(|_| cells.by_ref().take(columns).collect())
            .collect()
    }

    /// Number of columns, or 0 when there are no rows.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// True when the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the cell at `row`, `column`.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    /// Returns the row at `index` as a slice.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index >= self.rows {
            return None;
        }
        self.cells.get(index * self.columns..(index + 1) * self.columns)
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let columns = self.columns;
        (0..self.rows).map(move |r| &self.cells[r * columns..(r + 1) * columns])
    }

    /// Splits off the first row, returning it with the remaining rows.
    ///
    /// Returns `None` for an empty matrix.
    pub fn pop_first_row(self) -> Option<(Vec<T>, Rows<T>)> {
        if self.rows == 0 {
            return None;
        }
        let columns = self.columns;
        let mut cells = self.cells;
        let tail = cells.split_off(columns);
        let rest = Rows {
            cells: tail,
            columns: if self.rows > 1 { columns } else { 0 },
            rows: self.rows - 1,
        };
        Some((cells, rest))
    }

    /// Applies `f` to every cell, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Rows<U>
    where
        F: FnMut(&T) -> U,
    {
        Rows {
            cells: self.cells.iter().map(f).collect(),
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Reduces each row to a single value, in row order.
    pub fn map_rows<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&[T]) -> U,
    {
        self.iter_rows().map(f).collect()
    }

    /// Folds every row independently, starting each fold from `init`.
    pub fn rowwise_fold<B, F>(&self, init: B, mut f: F) -> Vec<B>
    where
        B: Clone,
        F: FnMut(B, &T) -> B,
    {
        self.iter_rows()
            .map(|row| row.iter().fold(init.clone(), &mut f))
            .collect()
    }

    /// Folds every column independently, starting each fold from `init`.
    ///
    /// Equivalent to a row-wise fold over the transposed matrix.
    pub fn columnwise_fold<B, F>(&self, init: B, mut f: F) -> Vec<B>
    where
        B: Clone,
        F: FnMut(B, &T) -> B,
    {
        (0..self.columns)
            .map(|c| {
                (0..self.rows)
                    .map(|r| &self.cells[r * self.columns + c])
                    .fold(init.clone(), &mut f)
            })
            .collect()
    }

    /// Swaps the roles of rows and columns.
    pub fn transpose(self) -> Rows<T> {
        let columns = self.columns;
        let row_count = self.rows;
        if columns == 0 || row_count == 0 {
            return Rows::default();
        }

        let mut slots: Vec<Option<T>> = (0..self.cells.len()).map(|_| None).collect();
        for (i, cell) in self.cells.into_iter().enumerate() {
            let (r, c) = (i / columns, i % columns);
            slots[c * row_count + r] = Some(cell);
        }

        Rows {
            cells: slots.into_iter().flatten().collect(),
            columns: row_count,
            rows: columns,
        }
    }

    /// Expands every cell into a vertical run of cells.
    ///
    /// Within a row, every cell must expand to the same number of values `n`;
    /// the row is then replaced by `n` rows. A row whose cells all expand to
    /// nothing disappears from the result.
    ///
    /// ```rust
    /// use textgrid::Rows;
    ///
    /// let rows = Rows::from_rows(vec![vec!["a\nb", "c\nd"]]).unwrap();
    /// let split = rows
    ///     .flat_map(|cell| cell.lines().collect())
    ///     .unwrap();
    /// assert_eq!(split.into_rows(), vec![vec!["a", "c"], vec!["b", "d"]]);
    /// ```
    pub fn flat_map<F>(self, mut f: F) -> Result<Rows<T>, RowsError>
    where
        F: FnMut(T) -> Vec<T>,
    {
        let columns = self.columns;
        let mut cells = Vec::with_capacity(self.cells.len());
        let mut row_count = 0;

        for row in self.into_rows() {
            let expanded: Vec<Vec<T>> = row.into_iter().map(&mut f).collect();
            let block = Rows::from_rows(expanded)?.transpose();
            row_count += block.rows;
            cells.extend(block.cells);
        }

        Ok(Rows {
            cells,
            columns: if row_count > 0 { columns } else { 0 },
            rows: row_count,
        })
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Rows<T> {
    type Error = RowsError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Rows::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Rows<i32> {
        Rows::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn from_rows_accepts_rectangular() {
        let rows = grid();
        assert_eq!(rows.column_count(), 3);
        assert_eq!(rows.row_count(), 3);
        assert_eq!(rows.get(1, 2), Some(&6));
        assert_eq!(rows.get(3, 0), None);
    }

    #[test]
    fn from_rows_reports_first_mismatch() {
        let err = Rows::from_rows(vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7, 8]]).unwrap_err();
        assert_eq!(
            err,
            RowsError::InconsistentLengths {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn empty_matrix_has_no_columns() {
        let rows: Rows<i32> = Rows::from_rows(vec![]).unwrap();
        assert_eq!(rows.column_count(), 0);
        assert!(rows.is_empty());
        assert!(rows.into_rows().is_empty());
    }

    #[test]
    fn zero_length_rows_are_kept() {
        let rows: Rows<i32> = Rows::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(rows.row_count(), 2);
        assert_eq!(rows.column_count(), 0);
        assert_eq!(rows.iter_rows().count(), 2);
        assert_eq!(rows.into_rows(), vec![Vec::<i32>::new(), Vec::new()]);
    }

    #[test]
    fn round_trip() {
        let source = vec![vec!["a", "b"], vec!["c", "d"]];
        let rows = Rows::from_rows(source.clone()).unwrap();
        assert_eq!(rows.into_rows(), source);
    }

    #[test]
    fn pop_first_row_splits_header() {
        let (head, rest) = grid().pop_first_row().unwrap();
        assert_eq!(head, vec![1, 2, 3]);
        assert_eq!(rest.into_rows(), vec![vec![4, 5, 6], vec![7, 8, 9]]);
    }

    #[test]
    fn pop_first_row_single_and_empty() {
        let rows = Rows::from_rows(vec![vec![1, 2]]).unwrap();
        let (head, rest) = rows.pop_first_row().unwrap();
        assert_eq!(head, vec![1, 2]);
        assert!(rest.is_empty());
        assert_eq!(rest.column_count(), 0);
        assert!(rest.pop_first_row().is_none());
    }

    #[test]
    fn map_preserves_shape() {
        let doubled = grid().map(|n| n * 2);
        assert_eq!(doubled.column_count(), 3);
        assert_eq!(doubled.get(2, 2), Some(&18));
    }

    #[test]
    fn map_rows_in_order() {
        let sums = grid().map_rows(|row| row.iter().sum::<i32>());
        assert_eq!(sums, vec![6, 15, 24]);
    }

    #[test]
    fn rowwise_and_columnwise_fold() {
        let rows = grid();
        assert_eq!(rows.rowwise_fold(0, |acc, n| acc.max(*n)), vec![3, 6, 9]);
        assert_eq!(rows.columnwise_fold(0, |acc, n| acc + n), vec![12, 15, 18]);
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let rows = Rows::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = rows.transpose();
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.into_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn from_columns_pads_short_columns() {
        let rows = Rows::from_columns(
            vec![vec!["x"], vec!["1", "2", "3"], vec!["y", "z"]],
            || "",
        );
        assert_eq!(rows.column_count(), 3);
        assert_eq!(
            rows.into_rows(),
            vec![vec!["x", "1", "y"], vec!["", "2", "z"], vec!["", "3", ""]]
        );
    }

    #[test]
    fn from_columns_without_cells_is_empty() {
        let none: Rows<u8> = Rows::from_columns(Vec::new(), || 0);
        assert!(none.is_empty());
        let hollow: Rows<u8> = Rows::from_columns(vec![Vec::new(), Vec::new()], || 0);
        assert!(hollow.is_empty());
    }

    #[test]
    fn transpose_of_zero_width_rows_is_empty() {
        let rows: Rows<i32> = Rows::from_rows(vec![vec![], vec![]]).unwrap();
        let t = rows.transpose();
        assert!(t.is_empty());
        assert_eq!(t.column_count(), 0);
    }

    #[test]
    fn flat_map_inconsistent_expansion() {
        let err = grid()
            .flat_map(|n| if n % 2 == 0 { vec![n] } else { vec![n, n] })
            .unwrap_err();
        assert_eq!(
            err,
            RowsError::InconsistentLengths {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn flat_map_expands_rows() {
        let rows = Rows::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let expanded = rows.flat_map(|n| vec![n, n * 10]).unwrap();
        assert_eq!(
            expanded.into_rows(),
            vec![vec![1, 2], vec![10, 20], vec![3, 4], vec![30, 40]]
        );
    }

    #[test]
    fn flat_map_deletes_rows() {
        let expanded = grid()
            .flat_map(|n| if (4..=6).contains(&n) { vec![] } else { vec![n] })
            .unwrap();
        assert_eq!(expanded.into_rows(), vec![vec![1, 2, 3], vec![7, 8, 9]]);
    }

    #[test]
    fn flat_map_deleting_everything_leaves_empty() {
        let expanded = grid().flat_map(|_| vec![]).unwrap();
        assert!(expanded.is_empty());
        assert_eq!(expanded.column_count(), 0);
    }

    #[test]
    fn try_from_vec() {
        let rows: Result<Rows<u8>, _> = vec![vec![1u8], vec![2, 3]].try_into();
        assert!(rows.is_err());
    }
}
