//! Record sources.

use async_trait::async_trait;
use countypop_types::CountyRecord;
use std::path::PathBuf;

use crate::url::DEFAULT_ENDPOINT;
use crate::{FetchClient, FetchError, decode_records};

/// Something that can load the county records a query session runs over.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Loads all records.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or decoded.
    async fn load(&self) -> Result<Vec<CountyRecord>, FetchError>;

    /// Short human-readable description of where records come from.
    fn describe(&self) -> String;
}

/// Loads records from the DataUSA API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: FetchClient,
    url: String,
}

impl HttpSource {
    /// Creates a source fetching `url` with the given client.
    #[must_use]
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Creates a source for [`DEFAULT_ENDPOINT`] with a default client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Ok(Self::new(FetchClient::with_defaults()?, DEFAULT_ENDPOINT))
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn load(&self) -> Result<Vec<CountyRecord>, FetchError> {
        self.client.fetch_records(&self.url).await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Loads records from a local JSON file.
///
/// The file may hold the API envelope or a bare array of records.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn load(&self) -> Result<Vec<CountyRecord>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records = decode_records(&bytes)?;
        tracing::info!(count = records.len(), path = %self.path.display(), "loaded county records");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
