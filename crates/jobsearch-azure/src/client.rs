//! HTTP adapter for one Azure Cognitive Search index.

use std::fmt;

use async_trait::async_trait;
use jobsearch_query::{
    IndexService, QueryError, RawDocument, Result, SearchRequest, SearchResponse, SuggestRequest,
    SuggestResponse,
};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::wire::{
    SearchBody, SearchResponseBody, SuggestBody, SuggestResponseBody, is_error_payload,
};

const API_KEY_HEADER: &str = "api-key";
const API_VERSION_PARAM: &str = "api-version";

/// Longest error body quoted in a transport failure.
const MAX_ERROR_BODY: usize = 512;

/// One index on an Azure Cognitive Search service.
///
/// Holds a shared `reqwest::Client`; cloning the client is cheap, so the job
/// and zip-code indexes share one connection pool.
#[derive(Clone)]
pub struct AzureSearchIndex {
    http: Client,
    base: Url,
    index: String,
    api_key: String,
    api_version: String,
}

impl AzureSearchIndex {
    /// Create an adapter for `index` on the service at `base`.
    pub fn new(
        http: Client,
        base: Url,
        index: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base,
            index: index.into(),
            api_key: api_key.into(),
            api_version: api_version.into(),
        }
    }

    /// `{base}/indexes/{index}/docs/{segments...}?api-version=...`
    fn docs_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| QueryError::transport(format!("cannot build URL from '{}'", self.base)))?
            .pop_if_empty()
            .extend(["indexes", self.index.as_str(), "docs"])
            .extend(segments);
        url.query_pairs_mut()
            .append_pair(API_VERSION_PARAM, &self.api_version);
        Ok(url)
    }

    async fn post<B, R>(&self, action: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.docs_url(&[action])?;
        log::debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed(action, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(action, status, response).await);
        }

        response.json().await.map_err(|e| {
            QueryError::transport_with_source(format!("failed to parse {action} response"), e)
        })
    }

    async fn status_error(
        &self,
        action: &str,
        status: StatusCode,
        response: reqwest::Response,
    ) -> QueryError {
        let body = response.text().await.unwrap_or_default();
        self.status_failure(action, status, body)
    }

    fn status_failure(&self, action: &str, status: StatusCode, mut body: String) -> QueryError {
        if body.len() > MAX_ERROR_BODY {
            let mut end = MAX_ERROR_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }
        QueryError::transport(format!(
            "index '{}' returned {status} for {action}: {body}",
            self.index
        ))
    }
}

fn request_failed(action: &str, e: reqwest::Error) -> QueryError {
    let message = if e.is_timeout() {
        format!("{action} request timed out")
    } else if e.is_connect() {
        format!("failed to connect to search service for {action}")
    } else {
        format!("{action} request failed")
    };
    QueryError::transport_with_source(message, e)
}

impl fmt::Debug for AzureSearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureSearchIndex")
            .field("base", &self.base.as_str())
            .field("index", &self.index)
            .field("api_version", &self.api_version)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

#[async_trait]
impl IndexService for AzureSearchIndex {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let body: SearchResponseBody = self.post("search", &SearchBody::from(request)).await?;
        SearchResponse::try_from(body)
    }

    async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse> {
        let body: SuggestResponseBody = self.post("suggest", &SuggestBody::from(request)).await?;
        SuggestResponse::try_from(body)
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<RawDocument>> {
        let url = self.docs_url(&[key])?;
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| request_failed("lookup", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Azure answers a missing index with 404 too, but with an error body.
            let body = response.text().await.unwrap_or_default();
            if is_error_payload(&body) {
                return Err(self.status_failure("lookup", status, body));
            }
            log::debug!("No document '{key}' in index '{}'", self.index);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(self.status_error("lookup", status, response).await);
        }

        let document: RawDocument = response.json().await.map_err(|e| {
            QueryError::transport_with_source("failed to parse lookup response", e)
        })?;
        Ok(Some(document))
    }

    fn name(&self) -> &str {
        &self.index
    }
}

// ============================================================================
// Tests
// ============================================================================
