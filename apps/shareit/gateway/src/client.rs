//! HTTP client for the ShareIt server.
//!
//! The gateway only forwards: whatever status and body the server answers
//! with is handed back to the caller unchanged. Failing to reach the server
//! at all is the one error this module produces.

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_helpers::SHARER_USER_ID_HEADER;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::UpstreamConfig;
use crate::error::{GatewayError, GatewayResult};

/// Server answer relayed to the gateway's caller
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, Body::from(self.body)).into_response();
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[derive(Clone)]
pub struct ShareItClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShareItClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, user_id: Option<i32>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match user_id {
            Some(id) => builder.header(SHARER_USER_ID_HEADER, id.to_string()),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> GatewayResult<UpstreamResponse> {
        let response = builder.send().await.inspect_err(|e| {
            warn!(error = %e, "ShareIt server request failed");
        })?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Relaying server response");

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    #[instrument(skip(self, query))]
    pub async fn get(
        &self,
        path: &str,
        user_id: Option<i32>,
        query: &[(&str, String)],
    ) -> GatewayResult<UpstreamResponse> {
        self.send(self.request(Method::GET, path, user_id).query(query))
            .await
    }

    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        user_id: Option<i32>,
        body: &B,
    ) -> GatewayResult<UpstreamResponse> {
        self.send(self.request(Method::POST, path, user_id).json(body))
            .await
    }

    #[instrument(skip(self, query, body))]
    pub async fn patch<B: Serialize>(
        &self,
        path: &str,
        user_id: Option<i32>,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> GatewayResult<UpstreamResponse> {
        let builder = self.request(Method::PATCH, path, user_id).query(query);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(builder).await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        path: &str,
        user_id: Option<i32>,
    ) -> GatewayResult<UpstreamResponse> {
        self.send(self.request(Method::DELETE, path, user_id)).await
    }

    /// Liveness of the server, used by the gateway's `/ready`
    pub async fn ping(&self) -> GatewayResult<()> {
        let response = self.get("/health", None, &[]).await?;
        if response.status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Unavailable(format!(
                "health check answered {}",
                response.status
            )))
        }
    }
}
