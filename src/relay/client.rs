//! Downstream HTTP client.
//!
//! One plain `POST` per upload. No retries and no timeout: the call lasts as
//! long as the downstream service takes to answer or the connection fails.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Method, Request, StatusCode, Uri},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::http::X_REQUEST_ID;
use crate::relay::RelayError;

/// What the downstream service answered.
#[derive(Debug, Clone)]
pub struct DownstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl DownstreamResponse {
    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Client for the downstream execution service.
#[derive(Clone)]
pub struct DownstreamClient {
    client: Client<HttpConnector, Body>,
    url: Uri,
}

impl DownstreamClient {
    /// Create a client posting to `url`.
    pub fn new(url: Uri) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, url }
    }

    /// Downstream address requests are sent to.
    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// Post `text` as `text/plain` and buffer the whole answer.
    pub async fn post_text(
        &self,
        text: String,
        request_id: Option<&HeaderValue>,
    ) -> Result<DownstreamResponse, RelayError> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(self.url.clone())
            .header(header::CONTENT_TYPE, "text/plain");

        if let Some(id) = request_id {
            builder = builder.header(X_REQUEST_ID, id.clone());
        }

        let request = builder.body(Body::from(text))?;
        let response = self.client.request(request).await?;

        let status = response.status();
        let body = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .map_err(RelayError::ResponseBody)?;

        Ok(DownstreamResponse { status, body })
    }
}
