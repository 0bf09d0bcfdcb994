use num_traits::Num;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    I8,
    I16,
    I32,
    I64,
    ISize,
    U8,
    U16,
    U32,
    U64,
    USize,
    #[cfg(feature = "f16")]
    F16,
    F32,
    F64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::ISize => "isize",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::USize => "usize",
            #[cfg(feature = "f16")]
            DType::F16 => "f16",
            DType::F32 => "f32",
            DType::F64 => "f64",
        };
        f.write_str(s)
    }
}

/// Element type a [`Matrix`](crate::Matrix) can hold.
///
/// Arithmetic goes through `num_traits::Num`, so any numeric type with
/// zero, one and the four basic operators qualifies.
pub trait MatrixType: Copy + Num + PartialOrd + fmt::Debug + fmt::Display + 'static {
    const DTYPE: DType;
}

#[macro_export]
macro_rules! impl_matrix_type {
    ($($e:ty => $d:ident),*) => {
        $(impl $crate::MatrixType for $e {
            const DTYPE: $crate::DType = $crate::DType::$d;
        })*
    };
}

impl_matrix_type!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => USize,
    f32 => F32,
    f64 => F64
);

#[cfg(feature = "f16")]
impl_matrix_type!(half::f16 => F16);
