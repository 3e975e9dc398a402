use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, Mul};

use crate::error::{MathError, Result};
use crate::number_traits::{NumericOps, One, Zero};
use crate::vector::{Vector2, Vector3, Vector4};

pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;

/// Tolerance conventionally passed to `equals_epsilon`.
pub const DEFAULT_EPSILON: f32 = 0.01;

pub trait Identity {
    fn identity() -> Self;
}

fn within_epsilon<T>(difference: T, epsilon: T) -> bool
where
    T: Copy + NumericOps,
{
    difference < epsilon && difference > -epsilon
}

// -0.0 hashes like 0.0 since both compare equal.
#[allow(clippy::float_cmp)]
fn hash_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

macro_rules! struct_mat {
    ($name:ident, $vector:ident, $n:literal,
     rows: ($($row:ident => $row_idx:literal),*),
     cols: ($($col:ident => $col_idx:literal),*)) => {
        /// Square matrix stored in row-major order: element `(i, j)` lives
        /// at index `i * N + j`.
        #[must_use]
        #[derive(Clone, Copy, PartialEq)]
        pub struct $name<T = f32> {
            values: [T; $n * $n],
        }

        impl<T> $name<T> {
            /// Builds a matrix from its elements in row-major order.
            pub const fn with_values(values: [T; $n * $n]) -> Self {
                Self { values }
            }

            #[must_use]
            pub fn elements(&self) -> &[T; $n * $n] {
                &self.values
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Zero,
        {
            pub fn zero() -> Self {
                Self {
                    values: [T::zero(); $n * $n],
                }
            }

            pub fn from_diagonal(diagonal: T) -> Self {
                let mut values = [T::zero(); $n * $n];
                for i in 0..$n {
                    values[i * $n + i] = diagonal;
                }
                Self { values }
            }
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            /// # Panics
            ///
            /// Panics if `i` is out of range.
            pub fn row(&self, i: usize) -> $vector<T> {
                assert!(i < $n, "row {i} out of range for {}", stringify!($name));
                $vector::new($(self.values[i * $n + $col_idx]),*)
            }

            /// # Panics
            ///
            /// Panics if `j` is out of range.
            pub fn col(&self, j: usize) -> $vector<T> {
                assert!(j < $n, "column {j} out of range for {}", stringify!($name));
                $vector::new($(self.values[$row_idx * $n + j]),*)
            }

            $(
                pub fn $row(&self) -> $vector<T> {
                    self.row($row_idx)
                }
            )*

            $(
                pub fn $col(&self) -> $vector<T> {
                    self.col($col_idx)
                }
            )*

            pub fn transpose(&self) -> Self {
                let mut values = self.values;
                for i in 0..$n {
                    for j in 0..$n {
                        values[j * $n + i] = self.values[i * $n + j];
                    }
                }
                Self { values }
            }
        }

        impl<T> $name<T>
        where
            T: Copy + NumericOps,
        {
            /// Returns true as soon as a single pair of elements differs by
            /// less than `epsilon`, see `all_within_epsilon` for the strict
            /// variant.
            #[must_use]
            pub fn equals_epsilon(&self, other: &Self, epsilon: T) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .any(|(&lhs, &rhs)| within_epsilon(lhs - rhs, epsilon))
            }

            #[must_use]
            pub fn all_within_epsilon(&self, other: &Self, epsilon: T) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(&lhs, &rhs)| within_epsilon(lhs - rhs, epsilon))
            }
        }

        impl<T> Default for $name<T>
        where
            T: Copy + Zero,
        {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T> Identity for $name<T>
        where
            T: Copy + Zero + One,
        {
            fn identity() -> Self {
                Self::from_diagonal(T::one())
            }
        }

        impl Hash for $name<f32> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for value in self.values {
                    hash_bits(value).hash(state);
                }
            }
        }

        impl<T> Debug for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "{} [", stringify!($name))?;
                for i in 0..$n {
                    write!(f, "\t")?;
                    for j in 0..$n {
                        write!(f, "{}, ", self.values[i * $n + j])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }

        impl<T> Mul<Self> for $name<T>
        where
            T: Copy + NumericOps,
        {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut values = self.values;

                for i in 0..$n {
                    for j in 0..$n {
                        let mut sum = self.values[i * $n] * rhs.values[j];
                        for k in 1..$n {
                            sum = sum + self.values[i * $n + k] * rhs.values[k * $n + j];
                        }
                        values[i * $n + j] = sum;
                    }
                }

                Self { values }
            }
        }

        /// Column vector: component `i` is `row_i · v`.
        impl<T> Mul<$vector<T>> for $name<T>
        where
            T: Copy + NumericOps,
        {
            type Output = $vector<T>;

            fn mul(self, rhs: $vector<T>) -> Self::Output {
                $vector::new($(self.$row().dot(&rhs)),*)
            }
        }

        /// Row vector: component `j` is `v · col_j`.
        impl<T> Mul<$name<T>> for $vector<T>
        where
            T: Copy + NumericOps,
        {
            type Output = $vector<T>;

            fn mul(self, rhs: $name<T>) -> Self::Output {
                $vector::new($(self.dot(&rhs.$col())),*)
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = [T];

            fn index(&self, index: usize) -> &Self::Output {
                &self.values[index * $n..index * $n + $n]
            }
        }

        impl<T> From<[T; $n * $n]> for $name<T> {
            fn from(values: [T; $n * $n]) -> Self {
                Self::with_values(values)
            }
        }

        impl<T> TryFrom<&[T]> for $name<T>
        where
            T: Copy,
        {
            type Error = MathError;

            fn try_from(values: &[T]) -> Result<Self> {
                <[T; $n * $n]>::try_from(values)
                    .map(Self::with_values)
                    .map_err(|_| MathError::ElementCount {
                        expected: $n * $n,
                        actual: values.len(),
                    })
            }
        }

        /// Array of rows.
        impl<T> From<$name<T>> for [[T; $n]; $n]
        where
            T: Copy,
        {
            fn from(matrix: $name<T>) -> Self {
                [$(matrix.row($row_idx).into()),*]
            }
        }
    };
}

struct_mat!(Matrix2, Vector2, 2,
    rows: (row0 => 0, row1 => 1),
    cols: (col0 => 0, col1 => 1));
struct_mat!(Matrix3, Vector3, 3,
    rows: (row0 => 0, row1 => 1, row2 => 2),
    cols: (col0 => 0, col1 => 1, col2 => 2));
struct_mat!(Matrix4, Vector4, 4,
    rows: (row0 => 0, row1 => 1, row2 => 2, row3 => 3),
    cols: (col0 => 0, col1 => 1, col2 => 2, col3 => 3));
