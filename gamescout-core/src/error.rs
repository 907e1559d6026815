use thiserror::Error;

/// Errors raised by the core data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Month outside 1..=12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year that chrono cannot represent
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Random search bounds in the wrong order
    #[error("Invalid year range: {min} > {max}")]
    InvalidYearRange { min: i32, max: i32 },

    /// A review was already applied to this record
    #[error("Record '{0}' already carries a review")]
    AlreadyEnriched(String),
}
