/// Failures reported by a stock source (upstream service or storage).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("source.not_found")]
    NotFound,
    #[error("source.invalid_response")]
    InvalidResponse,
    #[error("source.unavailable")]
    Unavailable { message: String },
    #[error("source.upstream_error")]
    Upstream { status: u16, message: String },
}

impl SourceError {
    pub fn not_found() -> Self {
        SourceError::NotFound
    }
    pub fn invalid_response() -> Self {
        SourceError::InvalidResponse
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        SourceError::Unavailable {
            message: message.into(),
        }
    }
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        SourceError::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Status code reported by the source. `None` means no connection was made.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SourceError::NotFound => Some(404),
            SourceError::InvalidResponse => Some(200),
            SourceError::Unavailable { .. } => None,
            SourceError::Upstream { status, .. } => Some(*status),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SourceError::NotFound => "not found",
            SourceError::InvalidResponse => "invalid response",
            SourceError::Unavailable { message } => message,
            SourceError::Upstream { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_no_status_code_when_unavailable() {
        let error = SourceError::unavailable("connection refused");

        assert_eq!(error.status_code(), None);
        assert_eq!(error.message(), "connection refused");
    }

    #[test]
    fn should_preserve_upstream_status_and_message() {
        let error = SourceError::upstream(502, "bad gateway");

        assert_eq!(error.status_code(), Some(502));
        assert_eq!(error.message(), "bad gateway");
        assert_eq!(error.to_string(), "source.upstream_error");
    }

    #[test]
    fn should_report_not_found_as_404() {
        assert_eq!(SourceError::not_found().status_code(), Some(404));
    }
}
