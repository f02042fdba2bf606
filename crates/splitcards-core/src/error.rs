//! Error types for the split cards catalog

use thiserror::Error;

/// Main error type for loading a card catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading a local data file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching a remote data file failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// The data source string could not be understood
    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    /// A line failed to decode under the strict load policy
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// The data decoded to no usable cards or no option values
    #[error("No filterable cards in data source")]
    Empty,
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err.to_string())
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::MalformedLine {
            line: 3,
            reason: "expected value".to_string(),
        };
        assert_eq!(format!("{}", err), "Malformed line 3: expected value");
        assert_eq!(
            format!("{}", CatalogError::Empty),
            "No filterable cards in data source"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
