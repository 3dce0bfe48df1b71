use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::models::book::{BookRecord, Description};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Catalog access used by the recommendation pipeline. Every method may
/// legitimately return an empty result; failures are surfaced so the
/// caller decides how far they propagate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn search_by_title(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError>;

    async fn search_by_subject(
        &self,
        subject: &str,
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError>;

    async fn get_work_detail(&self, key: &str) -> Result<Option<Description>, ProviderError>;
}

const SEARCH_FIELDS: &str = "key,title,author_name,subject,first_publish_year";

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    docs: Vec<BookRecord>,
}

#[derive(Debug, Deserialize)]
struct WorkDetail {
    #[serde(default)]
    description: Option<Description>,
}

pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.openlibrary_url.trim_end_matches('/').to_string(),
        }
    }

    async fn search(
        &self,
        query: (&str, &str),
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError> {
        let url = format!("{}/search.json", self.base_url);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[query, ("fields", SEARCH_FIELDS), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::BadStatus(response.status()));
        }

        let page: SearchPage = response.json().await?;
        info!("Catalog returned {} docs for {}={}", page.docs.len(), query.0, query.1);
        Ok(page.docs)
    }
}

#[async_trait]
impl MetadataProvider for OpenLibraryClient {
    async fn search_by_title(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError> {
        self.search(("title", title), limit).await
    }

    async fn search_by_subject(
        &self,
        subject: &str,
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError> {
        self.search(("subject", subject), limit).await
    }

    async fn get_work_detail(&self, key: &str) -> Result<Option<Description>, ProviderError> {
        let url = format!("{}{}.json", self.base_url, key);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::BadStatus(response.status()));
        }

        let detail: WorkDetail = response.json().await?;
        Ok(detail.description)
    }
}
