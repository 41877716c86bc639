/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),
}

impl ApiError {
    /// HTTP status of a server error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_status() {
        let err = ApiError::Server { status: 422, message: "dates overlap".into() };
        assert_eq!(err.to_string(), "HTTP 422: dates overlap");
        assert_eq!(err.status(), Some(422));
        assert_eq!(ApiError::Decode("x".into()).status(), None);
    }
}
