use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A slice did not hold exactly as many elements as the target type.
    #[error("expected {expected} elements, got {actual}")]
    ElementCount { expected: usize, actual: usize },
}
