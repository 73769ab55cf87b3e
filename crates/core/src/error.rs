use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing pivot cell {column} for campaign '{campaign}' (week of {week_start})")]
    MissingPivotCell {
        campaign: String,
        week_start: chrono::NaiveDate,
        column: String,
    },

    #[error("Duplicate observation {column} for campaign '{campaign}' (week of {week_start})")]
    DuplicateObservation {
        campaign: String,
        week_start: chrono::NaiveDate,
        column: String,
    },

    #[error("Unknown filter column '{0}'")]
    UnknownFilterColumn(String),

    #[error("Unknown grouping dimension '{0}'")]
    UnknownDimension(String),

    #[error("Campaign '{campaign}' ends ({end}) before it starts ({start})")]
    InvalidDateRange {
        campaign: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
