#![warn(clippy::pedantic)]

pub use keel_math as math;
