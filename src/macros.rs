/// Builds a [`Matrix`](crate::Matrix) from a nested row literal.
///
/// ```
/// use densemat::{mat, Shape};
///
/// let m = mat![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.shape(), Shape::new(2, 3));
/// ```
#[macro_export]
macro_rules! mat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from(vec![$([$($x,)*],)*])
    }};
}
