use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("read schema: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid override target '{0}' (expected resource.field)")]
    InvalidOverride(String),
}
