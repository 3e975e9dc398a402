use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result};
use crate::number_traits::{Float, NumericOps, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal,
     ($head:ident : $HEAD_TY:ty => $head_idx:tt, $($dim:ident : $TY:ty => $idx:tt),*)) => {
        #[must_use]
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T = f32> {
            $head: T,
            $($dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($head: T, $($dim: T),*) -> Self {
                Self {
                    $head,
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            #[must_use]
            pub fn $head(&self) -> T {
                self.$head
            }

            $(
                #[must_use]
                pub fn $dim(&self) -> T {
                    self.$dim
                }
            )*
        }

        impl<T> $name<T>
        where
            T: Copy + NumericOps,
        {
            #[must_use]
            pub fn dot(&self, other: &Self) -> T {
                self.$head * other.$head $(+ self.$dim * other.$dim)*
            }

            #[must_use]
            pub fn len_sq(&self) -> T {
                self.dot(self)
            }
        }

        impl<T> $name<T>
        where
            T: Float,
        {
            #[must_use]
            pub fn len(&self) -> T {
                self.len_sq().sqrt()
            }

            /// Divides every component by the length. A zero-length vector
            /// yields non-finite components.
            #[allow(clippy::float_cmp)]
            pub fn normalized(&self) -> Self {
                let len = self.len();
                if len == T::zero() {
                    trace!("Normalizing zero-length {} {}", stringify!($name), self);
                }
                *self / len
            }
        }

        impl<T> Default for $name<T>
        where
            T: Zero,
        {
            fn default() -> Self {
                Self {
                    $head: T::zero(),
                    $($dim: T::zero(),)*
                }
            }
        }

        // `+0.0` and `-0.0` compare equal since their difference is zero.
        impl<T> PartialEq for $name<T>
        where
            T: Float,
        {
            #[allow(clippy::float_cmp)]
            fn eq(&self, other: &Self) -> bool {
                self.$head - other.$head == T::zero()
                    $(&& self.$dim - other.$dim == T::zero())*
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $head: self.$head + rhs.$head,
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $head: self.$head - rhs.$head,
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>,
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $head: self.$head * rhs,
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Float,
        {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                self * (T::one() / rhs)
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $head: -self.$head,
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, self.$head, $(self.$dim),*)
            }
        }

        impl<T> From<($HEAD_TY, $($TY),*)> for $name<T>
        where
            T: Copy,
        {
            fn from(tuple: ($HEAD_TY, $($TY),*)) -> Self {
                Self {
                    $head: tuple.$head_idx,
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($HEAD_TY, $($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                (vector.$head, $(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T> {
            fn from(value: [T; $len]) -> Self {
                let [$head, $($dim),*] = value;
                Self::new($head, $($dim),*)
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(value: $name<T>) -> Self {
                [value.$head, $(value.$dim),*]
            }
        }

        impl<T> TryFrom<&[T]> for $name<T>
        where
            T: Copy,
        {
            type Error = MathError;

            fn try_from(values: &[T]) -> Result<Self> {
                match *values {
                    [$head, $($dim),*] => Ok(Self::new($head, $($dim),*)),
                    _ => Err(MathError::ElementCount {
                        expected: $len,
                        actual: values.len(),
                    }),
                }
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", 2, (x: T => 0, y: T => 1));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: T => 0, y: T => 1, z: T => 2));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: T => 0, y: T => 1, z: T => 2, w: T => 3));

impl<T> Vector3<T>
where
    T: Copy + NumericOps,
{
    /// Right-handed cross product, `cross(x, y) == z`.
    pub fn cross(a: &Self, b: &Self) -> Self {
        Self::new(
            a.y * b.z - b.y * a.z,
            a.z * b.x - b.z * a.x,
            a.x * b.y - b.x * a.y,
        )
    }
}
