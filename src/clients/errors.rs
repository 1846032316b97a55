use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to retrieve access token: {0}")]
    AuthError(String),

    #[error("Failed to search artists: {0}")]
    QueryError(String),

    #[error("Search returned no artists")]
    EmptyResult,

    #[error("Failed to write spreadsheet: {0}")]
    ExportError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::ExportError(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
