//! Fetching starter kit files from the remote source.

use anyhow::Context;
use log::debug;
use reqwest::blocking::{Client as HttpClient, ClientBuilder};
use reqwest::{redirect, StatusCode};
use std::time::Duration;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failure to fetch file at {url}: not found")]
    NotFound { url: String },
    #[error("failure to fetch file at {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failure to fetch file at {url}: {error}")]
    Network { url: String, error: BoxError },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url } | Self::Status { url, .. } | Self::Network { url, .. } => url,
        }
    }
}

pub trait FileFetcher {
    /// Return the full contents behind `remote_id`. No retries.
    fn fetch(&self, remote_id: &str) -> Result<Vec<u8>, FetchError>;
}

impl<T: FileFetcher + ?Sized> FileFetcher for &T {
    fn fetch(&self, remote_id: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(remote_id)
    }
}

/// Blocking HTTP fetcher. Only `200 OK` counts as success.
pub struct HttpFetcher {
    http: HttpClient,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = client_builder(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http })
    }
}

/// Redirects are not followed: a `3xx` surfaces as [`FetchError::Status`].
fn client_builder(timeout: Duration) -> ClientBuilder {
    HttpClient::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
}

impl FileFetcher for HttpFetcher {
    fn fetch(&self, remote_id: &str) -> Result<Vec<u8>, FetchError> {
        let network = |e: reqwest::Error| FetchError::Network {
            url: remote_id.to_string(),
            error: Box::new(e),
        };

        debug!("GET {remote_id}");
        let response = self.http.get(remote_id).send().map_err(network)?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound {
                    url: remote_id.to_string(),
                })
            }
            status => {
                return Err(FetchError::Status {
                    url: remote_id.to_string(),
                    status: status.as_u16(),
                })
            }
        }
        let body = response.bytes().map_err(network)?;
        Ok(body.to_vec())
    }
}
