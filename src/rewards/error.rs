use thiserror::Error;

/// Errors raised when building a tier table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RewardsError {
    /// A table needs at least one tier.
    #[error("Tier table is empty")]
    Empty,

    /// Thresholds must strictly increase down the table.
    #[error("Tier '{name}' threshold {min_points} does not exceed the previous tier's {previous}")]
    Unordered {
        name: String,
        min_points: u64,
        previous: u64,
    },
}
