//! HTTP fetcher for the published API reference

use tracing::{debug, warn};

use crate::docs::error::FetchError;
use crate::docs::fetcher::{DocumentFetcher, DocumentKind};
use crate::symbols::version::Version;

/// Default base URL of the GTK 3 API reference
pub const DEFAULT_BASE_URL: &str = "https://developer.gnome.org/gtk3";

/// Fetcher for `{base_url}/{major}.{minor}/{file}` documents
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gtk-symbol-check")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn document_url(&self, version: Version, kind: DocumentKind) -> String {
        format!("{}/{}/{}", self.base_url, version, kind.file_name())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, version: Version, kind: DocumentKind) -> Result<String, FetchError> {
        let url = self.document_url(version, kind);
        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }

        if !status.is_success() {
            warn!("Reference server returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}
