//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements: fixed-width signed integers only.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Element data type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
}

impl DataType {
    /// Width of the element in bits
    pub const fn bits(self) -> u32 {
        match self {
            DataType::I8 => 8,
            DataType::I16 => 16,
            DataType::I32 => 32,
            DataType::I64 => 64,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "i{}", self.bits())
    }
}

/// Trait for types that can be stored as matrix elements
///
/// All arithmetic is wrapping two's-complement in the element width, so
/// results are reproducible bit for bit regardless of build profile.
pub trait MatrixElement:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr + Default + Sized
{
    /// The additive identity; never stored in a matrix
    const ZERO: Self;

    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                fn data_type() -> DataType {
                    DataType::$tag
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
