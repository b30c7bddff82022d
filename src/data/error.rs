use thiserror::Error;

/// Reasons a dataset file cannot be turned into a [`GameDataset`].
///
/// I/O and parse failures are carried as `anyhow` context instead.
///
/// [`GameDataset`]: super::model::GameDataset
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("no complete records released in {min_year} or later")]
    NoUsableRecords { min_year: i32 },
}
