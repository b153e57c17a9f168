//! Numeric element types
//!
//! Any `Clone` type can be stored in a sparse matrix. Numeric casts between
//! element types additionally require [`MatrixElement`].

use num_traits::NumCast;

/// Kind tag for the primitive numeric element types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl ElementKind {
    /// Get the size in bytes for this kind
    pub const fn size_bytes(&self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
            ElementKind::Isize | ElementKind::Usize => core::mem::size_of::<usize>(),
        }
    }

    /// Whether this kind is a floating point type
    pub const fn is_float(&self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ElementKind::I8 => "i8",
            ElementKind::I16 => "i16",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::Isize => "isize",
            ElementKind::U8 => "u8",
            ElementKind::U16 => "u16",
            ElementKind::U32 => "u32",
            ElementKind::U64 => "u64",
            ElementKind::Usize => "usize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

/// Trait for primitive numeric types that can be cast between each other
///
/// All numeric element types must be:
/// - Copy: Can be copied without allocation
/// - Default: Provide the zero used as the default value
/// - NumCast: Support range-checked conversion
pub trait MatrixElement: Copy + Default + PartialEq + NumCast + 'static {
    /// Get the kind tag for this element type
    fn kind() -> ElementKind;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn kind() -> ElementKind {
                    ElementKind::$kind
                }
            }
        )*
    };
}

impl_matrix_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}
