//! Where the card data comes from.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Default data file name, resolved relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "split_cards.json";

/// A location holding the newline-delimited card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file
    File(PathBuf),
    /// Remote resource fetched over HTTP(S)
    Http(Url),
}

impl DataSource {
    /// Read the whole resource as text. Performs exactly one read.
    pub async fn fetch_text(&self) -> CatalogResult<String> {
        match self {
            DataSource::File(path) => {
                tracing::debug!("Reading card data from {:?}", path);
                Ok(tokio::fs::read_to_string(path).await?)
            }
            DataSource::Http(url) => {
                tracing::debug!("Fetching card data from {}", url);
                let response = reqwest::get(url.clone()).await?.error_for_status()?;
                Ok(response.text().await?)
            }
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl FromStr for DataSource {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CatalogError::InvalidSource("empty data source".to_string()));
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(s)
                .map_err(|e| CatalogError::InvalidSource(format!("{}: {}", s, e)))?;
            return Ok(DataSource::Http(url));
        }
        Ok(DataSource::File(PathBuf::from(s)))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Http(url) => write!(f, "{}", url),
        }
    }
}
