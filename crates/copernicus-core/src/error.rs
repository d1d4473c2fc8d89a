use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopernicusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog index error: {0}")]
    Index(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error for {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("Sampling failed for {path}: {cause}")]
    Sampling {
        path: String,
        #[source]
        cause: Box<CopernicusError>,
    },

    #[error("Degenerate input: pixel sample has no elements")]
    DegenerateInput,

    #[error("Upstream color sampler unavailable: {0}")]
    UpstreamUnavailable(#[source] Box<CopernicusError>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed catalog record: {0}")]
    MalformedRecord(String),
}

pub type Result<T> = std::result::Result<T, CopernicusError>;
