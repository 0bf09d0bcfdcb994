use crate::error::{MResult, MatError};
use crate::Matrix;
use crate::Shape;
use crate::MatrixType;
use std::ops::Neg;

fn zip_with<T, F>(op: &'static str, lhs: &Matrix<T>, rhs: &Matrix<T>, f: F) -> MResult<Matrix<T>>
where
    T: MatrixType,
    F: Fn(T, T) -> T,
{
    lhs.check_same_shape(op, rhs)?;
    let data = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(&a, &b)| f(a, b))
        .collect();
    Matrix::from_vec(lhs.rows(), lhs.cols(), data)
}

fn zip_assign<T, F>(op: &'static str, lhs: &mut Matrix<T>, rhs: &Matrix<T>, f: F) -> MResult<()>
where
    T: MatrixType,
    F: Fn(T, T) -> T,
{
    lhs.check_same_shape(op, rhs)?;
    lhs.as_slice_mut()
        .iter_mut()
        .zip(rhs.iter())
        .for_each(|(a, &b)| *a = f(*a, b));
    Ok(())
}

impl<T: MatrixType> Matrix<T> {
    pub fn add_scalar_assign(&mut self, a: T) {
        self.map_inplace(|x| x + a)
    }

    pub fn sub_scalar_assign(&mut self, a: T) {
        self.map_inplace(|x| x - a)
    }

    pub fn mul_scalar_assign(&mut self, a: T) {
        self.map_inplace(|x| x * a)
    }

    /// Divides every element by `a`. Integer matrices use integer division
    /// per element, so `[4, 6] / 2 == [2, 3]`.
    pub fn div_scalar_assign(&mut self, a: T) {
        self.map_inplace(|x| x / a)
    }

    pub fn add_scalar(&self, a: T) -> Matrix<T> {
        self.map(|x| x + a)
    }

    pub fn sub_scalar(&self, a: T) -> Matrix<T> {
        self.map(|x| x - a)
    }

    pub fn mul_scalar(&self, a: T) -> Matrix<T> {
        self.map(|x| x * a)
    }

    pub fn div_scalar(&self, a: T) -> Matrix<T> {
        self.map(|x| x / a)
    }

    /// Element-wise sum. Shapes must be equal.
    pub fn add_matrix(&self, rhs: &Matrix<T>) -> MResult<Matrix<T>> {
        zip_with("add", self, rhs, |a, b| a + b)
    }

    /// Element-wise difference. Shapes must be equal.
    pub fn sub_matrix(&self, rhs: &Matrix<T>) -> MResult<Matrix<T>> {
        zip_with("sub", self, rhs, |a, b| a - b)
    }

    /// In-place element-wise sum. On a shape mismatch nothing is written.
    pub fn add_matrix_assign(&mut self, rhs: &Matrix<T>) -> MResult<()> {
        zip_assign("add", self, rhs, |a, b| a + b)
    }

    pub fn sub_matrix_assign(&mut self, rhs: &Matrix<T>) -> MResult<()> {
        zip_assign("sub", self, rhs, |a, b| a - b)
    }

    /// Matrix product `self * rhs`, requiring `self.cols() == rhs.rows()`.
    ///
    /// The result is `self.rows() x rhs.cols()` with
    /// `out[r][c] = sum(self[r][x] * rhs[x][c])` over `x in 0..self.cols()`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> MResult<Matrix<T>> {
        if !self.shape().can_multiply(&rhs.shape()) {
            return Err(MatError::inner_mismatch(self.shape(), rhs.shape()));
        }
        let (m, k) = self.shape().dims2();
        let n = rhs.cols();
        let lhs = self.as_slice();
        let rhs = rhs.as_slice();
        let mut out = vec![T::zero(); Shape::new(m, n).elem_count()];
        for r in 0..m {
            let dst = &mut out[r * n..(r + 1) * n];
            for x in 0..k {
                let a = lhs[r * k + x];
                let src = &rhs[x * n..(x + 1) * n];
                for (d, &b) in dst.iter_mut().zip(src) {
                    *d = *d + a * b;
                }
            }
        }
        Matrix::from_vec(m, n, out)
    }
}

/// `n * m` with the scalar on the left.
pub fn scale<T: MatrixType>(n: T, m: &Matrix<T>) -> Matrix<T> {
    m.map(|x| n * x)
}

macro_rules! impl_scalar_op {
    ($trt:ident, $mth:ident, $named:ident, $atrt:ident, $amth:ident, $anamed:ident) => {
        impl<T: MatrixType> std::ops::$trt<T> for Matrix<T> {
            type Output = Matrix<T>;
            fn $mth(mut self, rhs: T) -> Self::Output {
                self.$anamed(rhs);
                self
            }
        }

        impl<T: MatrixType> std::ops::$trt<T> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $mth(self, rhs: T) -> Self::Output {
                self.$named(rhs)
            }
        }

        impl<T: MatrixType> std::ops::$atrt<T> for Matrix<T> {
            fn $amth(&mut self, rhs: T) {
                self.$anamed(rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, add_scalar, AddAssign, add_assign, add_scalar_assign); // +
impl_scalar_op!(Sub, sub, sub_scalar, SubAssign, sub_assign, sub_scalar_assign); // -
impl_scalar_op!(Mul, mul, mul_scalar, MulAssign, mul_assign, mul_scalar_assign); // *
impl_scalar_op!(Div, div, div_scalar, DivAssign, div_assign, div_scalar_assign); // /

// Shape errors cannot escape a compound operator, so only the
// value-returning forms are provided; they yield `MResult`.
macro_rules! impl_matrix_op {
    ($trt:ident, $mth:ident, $named:ident) => {
        impl<T: MatrixType> std::ops::$trt<&Matrix<T>> for &Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(self, rhs: &Matrix<T>) -> Self::Output {
                self.$named(rhs)
            }
        }

        impl<T: MatrixType> std::ops::$trt<Matrix<T>> for Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(self, rhs: Matrix<T>) -> Self::Output {
                self.$named(&rhs)
            }
        }

        impl<T: MatrixType> std::ops::$trt<&Matrix<T>> for Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(self, rhs: &Matrix<T>) -> Self::Output {
                self.$named(rhs)
            }
        }
    };
}

impl_matrix_op!(Add, add, add_matrix);
impl_matrix_op!(Sub, sub, sub_matrix);
impl_matrix_op!(Mul, mul, matmul);

macro_rules! impl_scalar_lhs {
    ($($e:ty),*) => {
        $(impl std::ops::Mul<&Matrix<$e>> for $e {
            type Output = Matrix<$e>;
            fn mul(self, rhs: &Matrix<$e>) -> Self::Output {
                scale(self, rhs)
            }
        }

        impl std::ops::Mul<Matrix<$e>> for $e {
            type Output = Matrix<$e>;
            fn mul(self, mut rhs: Matrix<$e>) -> Self::Output {
                rhs.map_inplace(|x| self * x);
                rhs
            }
        })*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: MatrixType + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(mut self) -> Self::Output {
        self.map_inplace(|x| -x);
        self
    }
}

impl<T: MatrixType + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
