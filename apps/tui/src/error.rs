use thiserror::Error;

/// Fatal problems with the dataset. The dashboard never starts on a partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset contains no rows")]
    Empty,

    #[error("dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("duplicate observation for {country} in {year}")]
    DuplicateRow { country: String, year: i32 },
}
