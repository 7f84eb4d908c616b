use astra::Response;
use thiserror::Error;

/// Problems with the listings dataset itself: fetching, parsing or deriving
/// filter domains from it.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to fetch {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("failed to read {location}: {message}")]
    Read { location: String, message: String },

    #[error("malformed CSV at row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("cannot derive a filter domain for '{column}': dataset is empty")]
    EmptyDataset { column: String },
}

/// Errors originating from either the server logic
/// (routing, bad query strings) or downstream layers (dataset, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Dataset Error: {0}")]
    Data(#[from] DataError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Data(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
