use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("no data to analyze")]
    EmptyDataset,

    #[error("Calculation error: {0}")]
    Calculation(String),
}
