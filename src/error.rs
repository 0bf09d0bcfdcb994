use crate::shape::Shape;
use thiserror::Error;

pub type MResult<T> = Result<T, MatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("{op}: matrices are not equal size ({lhs} vs {rhs})")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("matmul: rows do not match columns {{{} != {}}} ({} * {})", .lhs.cols(), .rhs.rows(), .lhs, .rhs)]
    InnerDimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("index ({row}, {col}) out of range for {shape} matrix")]
    OutOfRange { row: usize, col: usize, shape: Shape },
    #[error("{rows}x{cols} matrix has more elements than fit in usize")]
    SizeOverflow { rows: usize, cols: usize },
    #[error("buffer length {got} does not match {expected} elements")]
    BufferLength { expected: usize, got: usize },
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl MatError {
    pub(crate) fn shape_mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        let e = MatError::ShapeMismatch { op, lhs, rhs };
        log::warn!(target: "densemat", "{}", e);
        e
    }

    pub(crate) fn inner_mismatch(lhs: Shape, rhs: Shape) -> Self {
        let e = MatError::InnerDimensionMismatch { lhs, rhs };
        log::warn!(target: "densemat", "{}", e);
        e
    }
}

impl From<MatError> for String {
    fn from(e: MatError) -> Self {
        format!("{}", e)
    }
}
