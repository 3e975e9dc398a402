#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
mod number_traits;
pub mod vector;

pub use error::{MathError, Result};
