use std::fmt;

pub(crate) type Layout = [usize; 2];

/// Row and column extents of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape(pub(crate) Layout);

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Shape {
        Shape([rows, cols])
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.0[0], self.0[1])
    }

    pub fn rows(&self) -> usize {
        self.0[0]
    }

    pub fn cols(&self) -> usize {
        self.0[1]
    }

    /// `rows * cols`, or `None` when the product does not fit in `usize`.
    pub fn checked_elem_count(&self) -> Option<usize> {
        self.0[0].checked_mul(self.0[1])
    }

    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn elem_count(&self) -> usize {
        match self.checked_elem_count() {
            Some(n) => n,
            None => panic!("element count of {} overflows usize", self),
        }
    }

    pub fn is_square(&self) -> bool {
        self.0[0] == self.0[1]
    }

    pub fn transposed(&self) -> Shape {
        Shape([self.0[1], self.0[0]])
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.0[1] + col
    }

    #[inline]
    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        row < self.0[0] && col < self.0[1]
    }

    /// Whether `self * rhs` is defined.
    pub fn can_multiply(&self, rhs: &Shape) -> bool {
        self.0[1] == rhs.0[0]
    }
}

impl From<(usize, usize)> for Shape {
    fn from((r, c): (usize, usize)) -> Self {
        Shape([r, c])
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0[0], self.0[1])
    }
}
