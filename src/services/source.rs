// src/services/source.rs

//! Remote data client.
//!
//! Issues a single GET per resource path against the parliamentary web
//! service. Anything other than `200 OK` is reported as "no content" rather
//! than an error; only transport failures surface as errors.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use url::Url;

use crate::error::Result;
use crate::models::RemoteConfig;
use crate::utils::http::{ACCEPT_JSON, create_async_client};
use crate::utils::resource_url;

/// A source of raw resource bodies addressed by path.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch a resource.
    ///
    /// Returns `Ok(None)` when the source has no content for `path`.
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Base address results should link back to.
    fn base_url(&self) -> &Url;
}

/// `DataSource` backed by the remote web service.
pub struct RemoteClient {
    client: Client,
    base_url: Url,
    format: String,
}

impl RemoteClient {
    /// Create a new remote client with the given configuration.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            base_url: config.base_url()?,
            format: config.format.clone(),
        })
    }
}

#[async_trait]
impl DataSource for RemoteClient {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>> {
        log::info!("fetching {}", path);
        let url = resource_url(&self.base_url, path, &self.format)?;

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, ACCEPT_JSON)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::debug!("{} answered {}, treating as no content", path, status);
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(Some(body.to_vec()))
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
