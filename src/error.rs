use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("No data to download")]
    NoData,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("plotting error: {0}")]
    Plot(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
