//! Dictionary-of-keys sparse store
//!
//! Non-zero elements are kept in insertion order: a hash index maps each
//! coordinate to a slot in an entry vector. Removing an element leaves a
//! vacant slot so the remaining elements keep their relative order; the
//! vector is compacted once vacant slots outnumber live ones.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{FormatError, Result, SpmxError};
use crate::traits::{MatrixElement, MatrixOperations, SparseMatrix};

/// Vacant slots tolerated before compaction is considered
const COMPACT_THRESHOLD: usize = 32;

/// A `(row, col)` cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Sparse matrix storing only its non-zero elements
///
/// `set` is the only mutation primitive and the only place zero
/// suppression is enforced. It does not check bounds; the decoder and
/// [`Matrix::try_from_triplets`] do that at construction time.
#[derive(Debug, Clone)]
pub struct Matrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    slots: Vec<Option<(Coord, T)>>,
    index: HashMap<Coord, usize>,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate and zero
    /// values remove them. A coordinate outside the dimensions fails with
    /// [`FormatError::OutOfBounds`], where `line` is the 1-based position of
    /// the triplet.
    pub fn try_from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (position, (row, col, value)) in triplets.into_iter().enumerate() {
            if row >= rows || col >= cols {
                return Err(SpmxError::Format(FormatError::OutOfBounds {
                    line: position + 1,
                    row: row as i128,
                    col: col as i128,
                }));
            }
            matrix.set(row, col, value);
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Stored value at `(row, col)`, or zero when absent
    ///
    /// Out-of-range coordinates are treated like absent ones.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.index
            .get(&Coord::new(row, col))
            .and_then(|&slot| self.slots[slot])
            .map_or(T::ZERO, |(_, value)| value)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.index.contains_key(&Coord::new(row, col))
    }

    /// Store `value` at `(row, col)`, removing the element when it is zero
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let coord = Coord::new(row, col);
        if value.is_zero() {
            if let Some(slot) = self.index.remove(&coord) {
                self.slots[slot] = None;
                self.maybe_compact();
            }
            return;
        }

        match self.index.get(&coord) {
            Some(&slot) => self.slots[slot] = Some((coord, value)),
            None => {
                self.index.insert(coord, self.slots.len());
                self.slots.push(Some((coord, value)));
            }
        }
    }

    /// Non-zero elements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Element-wise negation
    pub fn negate(&self) -> Result<Self> {
        let mut result = Self::new(self.rows, self.cols);
        for (coord, value) in self.iter() {
            let negated = value
                .checked_neg()
                .ok_or(SpmxError::ArithmeticOverflow(coord))?;
            result.set(coord.row, coord.col, negated);
        }
        Ok(result)
    }

    fn maybe_compact(&mut self) {
        let vacant = self.slots.len() - self.index.len();
        if vacant <= COMPACT_THRESHOLD || vacant <= self.index.len() {
            return;
        }

        self.slots.retain(Option::is_some);
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some((coord, _)) = entry {
                self.index.insert(*coord, slot);
            }
        }
    }
}

/// Equal dimensions and the same coordinate/value mapping; order is ignored
impl<T: MatrixElement> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.nnz() == other.nnz()
            && self
                .iter()
                .all(|(coord, value)| other.get(coord.row, coord.col) == value)
    }
}

impl<T: MatrixElement> SparseMatrix for Matrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        let value = self.get(row, col);
        (!value.is_zero()).then_some(value)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.index.len()
    }
}

impl<T: MatrixElement> MatrixOperations for Matrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<_> = self
            .iter()
            .filter(|(coord, _)| coord.row == row_index)
            .map(|(coord, value)| (coord.col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<_> = self
            .iter()
            .filter(|(coord, _)| coord.col == col_index)
            .map(|(coord, value)| (coord.row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn coords(matrix: &Matrix) -> Vec<(usize, usize)> {
        matrix.iter().map(|(c, _)| (c.row, c.col)).collect()
    }

    #[test]
    fn test_get_absent_and_out_of_range() {
        let mut m = Matrix::new(2, 2);
        m.set(1, 1, 9);
        assert_eq!(m.get(1, 1), 9);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.get(100, 100), 0);
    }

    #[test]
    fn test_zero_suppression() {
        let mut m = Matrix::new(3, 3);
        m.set(0, 0, 5);
        m.set(0, 0, 0);
        assert_eq!(m.get(0, 0), 0);
        assert!(!m.contains(0, 0));
        assert!(m.is_empty());

        // Setting zero where nothing is stored is a no-op
        m.set(2, 2, 0);
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut m = Matrix::new(5, 5);
        m.set(3, 1, 1);
        m.set(0, 4, 2);
        m.set(2, 2, 3);
        m.set(0, 4, 7); // overwrite keeps position
        assert_eq!(coords(&m), vec![(3, 1), (0, 4), (2, 2)]);

        m.set(3, 1, 0);
        assert_eq!(coords(&m), vec![(0, 4), (2, 2)]);

        // Re-inserted keys move to the end
        m.set(3, 1, 4);
        assert_eq!(coords(&m), vec![(0, 4), (2, 2), (3, 1)]);
        assert_eq!(m.get(0, 4), 7);
    }

    #[test]
    fn test_compaction_keeps_order_and_lookups() {
        let mut m = Matrix::new(200, 1);
        for row in 0..200 {
            m.set(row, 0, row as i64 + 1);
        }
        for row in (0..200).filter(|r| r % 4 != 0) {
            m.set(row, 0, 0);
        }
        assert_eq!(m.nnz(), 50);
        assert!(m.slots.len() < 200);

        let rows: Vec<usize> = m.iter().map(|(c, _)| c.row).collect();
        let expected: Vec<usize> = (0..200).step_by(4).collect();
        assert_eq!(rows, expected);
        for row in expected {
            assert_eq!(m.get(row, 0), row as i64 + 1);
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Matrix::new(2, 2);
        original.set(0, 0, 1);
        let mut copy = original.clone();
        copy.set(0, 0, 2);
        copy.set(1, 1, 3);
        assert_eq!(original.get(0, 0), 1);
        assert_eq!(original.nnz(), 1);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Matrix::try_from_triplets(2, 2, [(0, 0, 1), (1, 1, 2)]).unwrap();
        let b = Matrix::try_from_triplets(2, 2, [(1, 1, 2), (0, 0, 1)]).unwrap();
        let c = Matrix::try_from_triplets(2, 3, [(1, 1, 2), (0, 0, 1)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_try_from_triplets_bounds() {
        let err = Matrix::<i64>::try_from_triplets(2, 2, [(0, 0, 1), (2, 0, 5)]).unwrap_err();
        assert_eq!(
            err,
            SpmxError::Format(FormatError::OutOfBounds { line: 2, row: 2, col: 0 })
        );
    }

    #[test]
    fn test_negate() {
        let m = Matrix::try_from_triplets(2, 2, [(0, 1, 3), (1, 0, -4)]).unwrap();
        let n = m.negate().unwrap();
        assert_eq!(n.get(0, 1), -3);
        assert_eq!(n.get(1, 0), 4);

        let overflow = Matrix::<i32>::try_from_triplets(1, 1, [(0, 0, i32::MIN)]).unwrap();
        assert_eq!(
            overflow.negate(),
            Err(SpmxError::ArithmeticOverflow(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_row_and_col_views() {
        let m = Matrix::try_from_triplets(3, 3, [(1, 2, 6), (1, 0, 4), (0, 2, 3)]).unwrap();
        assert_eq!(m.get_row(1), vec![(0, 4), (2, 6)]);
        assert_eq!(m.get_col(2), vec![(0, 3), (1, 6)]);
        assert_eq!(m.get_element(2, 2), None);
        assert_eq!(m.dimensions(), (3, 3));
    }
}
