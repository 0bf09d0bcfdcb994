//! Dense row-major 2D matrices over a generic numeric element type.
//!
//! ```
//! use densemat::{mat, Matrix};
//!
//! let a = mat![[1, 2], [3, 4]];
//! let b = mat![[5, 6], [7, 8]];
//! assert_eq!(a.matmul(&b).unwrap(), mat![[19, 22], [43, 50]]);
//! assert_eq!(a.trace(), 5);
//! ```
mod element;
mod error;
mod macros;
mod op;
mod shape;

pub use element::{DType, MatrixType};
pub use error::{MResult, MatError};
pub use op::scale;
pub use shape::Shape;

use num_traits::Float;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A `rows x cols` grid of `T`, stored contiguously in row-major order.
///
/// The matrix exclusively owns its buffer. It is `Send`/`Sync` whenever
/// `T` is; sharing one matrix between threads for mutation requires the
/// caller to synchronize.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// An empty 0x0 matrix. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            shape: Shape::default(),
        }
    }

    /// Takes ownership of a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, v: Vec<T>) -> MResult<Self> {
        let shape = Shape::new(rows, cols);
        let expected = shape
            .checked_elem_count()
            .ok_or(MatError::SizeOverflow { rows, cols })?;
        if v.len() != expected {
            return Err(MatError::BufferLength {
                expected,
                got: v.len(),
            });
        }
        Ok(Self { data: v, shape })
    }

    /// Builds a matrix from owned rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MResult<Self> {
        let (shape, data) = flatten_rows(rows)?;
        Ok(Self { data, shape })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows(), "row {} out of range for {}", r, self.shape);
        let start = self.shape.offset(r, 0);
        &self.data[start..start + self.cols()]
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows()).map(move |r| self.row(r))
    }

    /// Element at `(row, col)`. Use [`Matrix::get`] for a lookup that
    /// returns an error instead.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &T {
        self.assert_in_range(row, col);
        &self.data[self.shape.offset(row, col)]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.assert_in_range(row, col);
        let i = self.shape.offset(row, col);
        &mut self.data[i]
    }

    pub fn get(&self, row: usize, col: usize) -> MResult<&T> {
        if !self.shape.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(&self.data[self.shape.offset(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> MResult<&mut T> {
        if !self.shape.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let i = self.shape.offset(row, col);
        Ok(&mut self.data[i])
    }

    #[inline]
    fn assert_in_range(&self, row: usize, col: usize) {
        assert!(
            self.shape.contains(row, col),
            "index ({}, {}) out of range for {} matrix",
            row,
            col,
            self.shape
        );
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatError {
        MatError::OutOfRange {
            row,
            col,
            shape: self.shape,
        }
    }

    /// Replaces the storage with a two-level buffer, taking ownership of it.
    /// The matrix takes the buffer's dimensions. Ragged input leaves the
    /// receiver untouched.
    pub fn assign_raw(&mut self, rows: Vec<Vec<T>>) -> MResult<()> {
        let (shape, data) = flatten_rows(rows)?;
        self.shape = shape;
        self.data = data;
        Ok(())
    }

    /// Releases the storage early, leaving a 0x0 matrix.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.shape = Shape::default();
    }

    pub(crate) fn check_same_shape(&self, op: &'static str, rhs: &Matrix<T>) -> MResult<()> {
        if self.shape != rhs.shape {
            return Err(MatError::shape_mismatch(op, self.shape, rhs.shape));
        }
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        let shape = Shape::new(rows, cols);
        Self {
            data: vec![value; shape.elem_count()],
            shape,
        }
    }

    /// Copies a fixed-size 2D literal; the shape is `R x C`.
    pub fn from_literal<const R: usize, const C: usize>(a: &[[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in a.iter() {
            data.extend_from_slice(row);
        }
        Self {
            data,
            shape: Shape::new(R, C),
        }
    }

    /// Copies `rhs` into the existing storage. Shapes must already match.
    pub fn assign_from(&mut self, rhs: &Matrix<T>) -> MResult<()> {
        self.check_same_shape("assign", rhs)?;
        self.data.copy_from_slice(&rhs.data);
        Ok(())
    }

    /// Reallocates to the literal's shape and copies its values.
    pub fn assign_literal<const R: usize, const C: usize>(&mut self, a: &[[T; C]; R]) {
        *self = Self::from_literal(a);
    }

    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape.dims2();
        let shape = self.shape.transposed();
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[self.shape.offset(r, c)]);
            }
        }
        Matrix { data, shape }
    }

    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape,
        }
    }

    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        self.data.iter_mut().for_each(|x| *x = f(*x));
    }
}

impl<T: MatrixType> Matrix<T> {
    /// A zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            *m.at_mut(i, i) = T::one();
        }
        m
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Sum of the main diagonal, over `min(rows, cols)` entries.
    pub fn trace(&self) -> T {
        let n = usize::min(self.rows(), self.cols());
        (0..n).fold(T::zero(), |sum, i| sum + *self.at(i, i))
    }

    /// Prints the matrix to stdout, one row per line, followed by a blank line.
    pub fn print(&self) {
        println!("{}\n", self);
    }
}

impl<T: Float> Matrix<T> {
    /// Element-wise comparison within `eps`. Shapes must be equal.
    pub fn abs_diff_eq(&self, other: &Matrix<T>, eps: T) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= eps)
    }
}

fn flatten_rows<T>(rows: Vec<Vec<T>>) -> MResult<(Shape, Vec<T>)> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |r| r.len());
    for (i, r) in rows.iter().enumerate() {
        if r.len() != n_cols {
            return Err(MatError::RaggedRows {
                row: i,
                expected: n_cols,
                got: r.len(),
            });
        }
    }
    let data: Vec<T> = rows.into_iter().flatten().collect();
    Ok((Shape::new(n_rows, n_cols), data))
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(a: [[T; C]; R]) -> Self {
        Matrix::from_literal(&a)
    }
}

impl<T: Copy, const C: usize> From<Vec<[T; C]>> for Matrix<T> {
    fn from(xs: Vec<[T; C]>) -> Self {
        let shape = Shape::new(xs.len(), C);
        let mut data = Vec::with_capacity(shape.elem_count());
        for row in xs.iter() {
            data.extend_from_slice(row);
        }
        Matrix { data, shape }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.row_iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
        }
        Ok(())
    }
}

struct Rows<'a, T>(&'a Matrix<T>);

impl<T: fmt::Debug> fmt::Debug for Rows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.row_iter()).finish()
    }
}

impl<T: MatrixType> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &format_args!("{}", self.shape))
            .field("dtype", &format_args!("{}", T::DTYPE))
            .field("data", &Rows(self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let m = Matrix::<f32>::new();
        assert_eq!(m.shape(), Shape::new(0, 0));
        assert!(m.is_empty());
        assert_eq!(m, Matrix::default());
    }

    #[test]
    fn test_zeros() {
        let m = Matrix::<i32>::zeros(2, 3);
        assert_eq!(m.shape().dims2(), (2, 3));
        assert!(m.iter().all(|&x| x == 0));
        assert_eq!(m.dtype(), DType::I32);
    }

    #[test]
    fn test_from_literal() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let m = Matrix::from_literal(&a);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(*m.at(1, 2), 6.0);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(Matrix::from(a), m);
    }

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1, 2, 3]),
            Err(MatError::BufferLength {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(
            r,
            Err(MatError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            })
        );
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m, Matrix::from([[1, 2], [3, 4]]));
    }

    #[test]
    fn test_element_access() {
        let mut m = Matrix::<i64>::zeros(2, 2);
        *m.at_mut(0, 1) = 7;
        m[(1, 1)] = 9;
        assert_eq!(*m.at(0, 1), 7);
        assert_eq!(m[(1, 1)], 9);
        assert_eq!(m.get(1, 1), Ok(&9));
        *m.get_mut(1, 0).unwrap() = 3;
        assert_eq!(m.as_slice(), &[0, 7, 3, 9]);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut m = Matrix::<u8>::zeros(2, 2);
        assert_eq!(
            m.get(2, 0),
            Err(MatError::OutOfRange {
                row: 2,
                col: 0,
                shape: Shape::new(2, 2)
            })
        );
        assert!(m.get_mut(0, 2).is_err());
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_range_panics() {
        let m = Matrix::<u8>::zeros(2, 2);
        let _ = m.at(5, 5);
    }

    #[test]
    #[should_panic(expected = "index (0, 2) out of range for 2x2 matrix")]
    fn test_at_column_overflow_panics() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        let _ = m.at(0, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_mut_column_overflow_panics() {
        let mut m = Matrix::from([[1, 2], [3, 4]]);
        m[(0, 3)] = 9;
    }

    #[test]
    fn test_from_vec_size_overflow() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            Matrix::<i32>::from_vec(huge, 2, vec![]),
            Err(MatError::SizeOverflow {
                rows: huge,
                cols: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_zeros_size_overflow_panics() {
        let _ = Matrix::<u8>::zeros(usize::MAX, 2);
    }

    #[test]
    fn test_assign_from() {
        let mut a = Matrix::<i32>::zeros(2, 2);
        let b = Matrix::from([[1, 2], [3, 4]]);
        a.assign_from(&b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_assign_from_mismatch_leaves_receiver() {
        let mut a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::<i32>::zeros(3, 3);
        let err = a.assign_from(&b).unwrap_err();
        assert_eq!(
            err,
            MatError::ShapeMismatch {
                op: "assign",
                lhs: Shape::new(2, 2),
                rhs: Shape::new(3, 3)
            }
        );
        assert_eq!(a, Matrix::from([[1, 2], [3, 4]]));
    }

    #[test]
    fn test_assign_raw() {
        let mut m = Matrix::<f64>::zeros(1, 1);
        m.assign_raw(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m[(1, 2)], 6.0);

        let before = m.clone();
        assert!(m.assign_raw(vec![vec![1.0], vec![]]).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_assign_literal_reshapes() {
        let mut m = Matrix::<i32>::zeros(1, 1);
        m.assign_literal(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.shape(), Shape::new(3, 3));
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn test_clear() {
        let mut m = Matrix::<i32>::identity(3);
        m.clear();
        assert_eq!(m.shape(), Shape::new(0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(a.transpose(), Matrix::from([[1, 3], [2, 4]]));

        let b = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let t = b.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t, Matrix::from([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transpose(), b);
    }

    #[test]
    fn test_trace() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(a.trace(), 5);

        let f = Matrix::from([[0.5f64, 9.0, 9.0], [9.0, 0.25, 9.0]]);
        assert_eq!(f.trace(), 0.75);

        assert_eq!(Matrix::<f32>::new().trace(), 0.0);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::<u32>::identity(3);
        assert_eq!(i.trace(), 3);
        assert_eq!(i[(0, 1)], 0);
        assert!(i.is_square());
    }

    #[test]
    fn test_display() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(a.to_string(), "1 2\n3 4");

        let f = Matrix::from([[1.0f32, 0.5]]);
        assert_eq!(format!("{:.2}", f), "1.00 0.50");

        assert_eq!(Matrix::<i32>::new().to_string(), "");
    }

    #[test]
    fn test_debug() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(
            format!("{:?}", a),
            "Matrix { shape: 2x2, dtype: i32, data: [[1, 2], [3, 4]] }"
        );
    }

    #[test]
    fn test_abs_diff_eq() {
        let a = Matrix::from([[0.1f64 + 0.2, 1.0]]);
        let b = Matrix::from([[0.3f64, 1.0]]);
        assert!(a.abs_diff_eq(&b, 1e-12));
        assert!(!a.abs_diff_eq(&Matrix::zeros(2, 1), 1e-12));
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_f16_elements() {
        use half::f16;
        let m = Matrix::from([
            [f16::from_f32(1.5), f16::from_f32(0.0)],
            [f16::from_f32(0.0), f16::from_f32(2.0)],
        ]);
        assert_eq!(m.dtype(), DType::F16);
        assert_eq!(m.trace(), f16::from_f32(3.5));
    }
}
