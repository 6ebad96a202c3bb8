//! HTTP implementation of the API traits

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiError, Comment, CommentsApi, LikeRequest, LikeResponse, NewComment, PageViews, ViewsApi};
use crate::config::ApiConfig;

/// Talks to the comments and page-view endpoints over HTTP
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!("lexblog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_token: config
                .session_token
                .clone()
                .filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session, or fail before any request is sent
    fn authenticated(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match &self.session_token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ApiError::Unauthenticated),
        }
    }

    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send once and decode the JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let body = check_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthenticated);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl CommentsApi for HttpApiClient {
    async fn fetch_comments(&self, post_slug: &str) -> Result<Vec<Comment>, ApiError> {
        let request = self
            .client
            .get(self.url("/api/comments"))
            .query(&[("postSlug", post_slug)]);
        self.send(self.with_session(request)).await.map_err(|e| {
            tracing::error!("Failed to fetch comments for '{}': {}", post_slug, e);
            e
        })
    }

    async fn submit_comment(
        &self,
        content: &str,
        post_slug: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment, ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::EmptyComment);
        }
        let body = NewComment {
            content,
            post_slug,
            parent_id,
        };
        let request = self.client.post(self.url("/api/comments")).json(&body);
        let result = match self.authenticated(request) {
            Ok(request) => self.send(request).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| {
            tracing::error!("Failed to submit comment on '{}': {}", post_slug, e);
            e
        })
    }

    async fn like_comment(
        &self,
        comment_id: &str,
        post_slug: &str,
        is_reply: bool,
    ) -> Result<LikeResponse, ApiError> {
        let body = LikeRequest {
            comment_id,
            post_slug,
            is_reply,
        };
        let request = self.client.post(self.url("/api/comments/like")).json(&body);
        let result = match self.authenticated(request) {
            Ok(request) => self.send(request).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| {
            tracing::error!("Failed to like comment {}: {}", comment_id, e);
            e
        })
    }
}

#[async_trait]
impl ViewsApi for HttpApiClient {
    async fn fetch_views(&self, slug: &str) -> Result<PageViews, ApiError> {
        let request = self
            .client
            .get(self.url("/api/page-views/"))
            .query(&[("slug", slug)]);
        self.send(request).await
    }
}
