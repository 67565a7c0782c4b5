use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use shared::{
    domain::PageNumber,
    error::{FetchErrorKind, FetchFailure},
    protocol::{RawUsersResponse, UsersPage, UsersPageQuery, TOTAL_COUNT_HEADER},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub mod extract;

pub use extract::{extract_total, extract_users, normalize};
pub use reqwest::StatusCode;

pub const DEFAULT_USERS_PATH: &str = "/api/users";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error {}", .0.as_u16())]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network(_) => FetchErrorKind::Network,
            Self::Status(_) => FetchErrorKind::Status,
            Self::Malformed(_) => FetchErrorKind::Malformed,
        }
    }
}

impl From<FetchError> for FetchFailure {
    fn from(value: FetchError) -> Self {
        Self::new(value.kind(), value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid users endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can answer an offset/limit users query.
#[async_trait]
pub trait UsersSource: Send + Sync {
    async fn fetch_users(&self, query: UsersPageQuery) -> Result<RawUsersResponse, FetchError>;
}

/// Fetches one page from `source` and normalizes whatever shape came back.
pub async fn fetch_page(
    source: &dyn UsersSource,
    page: PageNumber,
    page_size: u32,
) -> Result<UsersPage, FetchError> {
    let raw = source
        .fetch_users(UsersPageQuery::for_page(page, page_size))
        .await?;
    Ok(normalize(&raw, page_size))
}

#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    endpoint: Url,
}

impl UsersClient {
    pub fn new(server_url: &str) -> Result<Self, ClientSetupError> {
        Self::with_options(server_url, DEFAULT_USERS_PATH, None)
    }

    pub fn with_options(
        server_url: &str,
        users_path: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientSetupError> {
        let endpoint = users_endpoint(server_url, users_path)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn users_endpoint(server_url: &str, users_path: &str) -> Result<Url, ClientSetupError> {
    let raw = format!(
        "{}/{}",
        server_url.trim().trim_end_matches('/'),
        users_path.trim().trim_start_matches('/')
    );
    Url::parse(&raw).map_err(|source| ClientSetupError::InvalidEndpoint { url: raw, source })
}

#[async_trait]
impl UsersSource for UsersClient {
    async fn fetch_users(&self, query: UsersPageQuery) -> Result<RawUsersResponse, FetchError> {
        debug!(
            endpoint = %self.endpoint,
            offset = query.offset,
            limit = query.limit,
            "requesting users page"
        );
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "users endpoint returned non-success status");
            return Err(FetchError::Status(status));
        }

        let total_header = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        Ok(RawUsersResponse { total_header, body })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
