use async_trait::async_trait;

use crate::data_models::PageContent;
use crate::error::RetrievalError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageContent, RetrievalError>;
}

/// Plain GET with no extra headers, cookies or auth.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> HttpFetcher {
        HttpFetcher::default()
    }

    pub fn with_client(client: reqwest::Client) -> HttpFetcher {
        HttpFetcher { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent, RetrievalError> {
        let request_error = |source: reqwest::Error| RetrievalError::Request {
            url: url.to_string(),
            source,
        };

        let res = self.client.get(url).send().await.map_err(request_error)?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("fetching {url} returned {status}");
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = res.bytes().await.map_err(request_error)?;
        log::debug!("fetched {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}
