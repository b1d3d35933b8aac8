use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, PartialEq)]
pub enum ComputeError {
    /// A year-month pair that does not name a calendar month
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
