use crate::domain::errors::SourceError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StockError {
    #[error("stock.invalid_response")]
    InvalidResponse,
    #[error("stock.upstream_unavailable")]
    UpstreamUnavailable { message: String },
    #[error("stock.upstream_error")]
    UpstreamError { status: u16, message: String },
    #[error("stock.traversal_limit_exceeded")]
    TraversalLimitExceeded { max_pages: u32 },
}

impl StockError {
    /// Status code reported by the source, if any was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StockError::UpstreamError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<SourceError> for StockError {
    fn from(error: SourceError) -> Self {
        match error {
            SourceError::NotFound => StockError::UpstreamError {
                status: 404,
                message: "not found".to_string(),
            },
            SourceError::InvalidResponse => StockError::InvalidResponse,
            SourceError::Unavailable { message } => StockError::UpstreamUnavailable { message },
            SourceError::Upstream { status, message } => {
                StockError::UpstreamError { status, message }
            }
        }
    }
}
