//! JSON listing server with content reload
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/posts?search=&tag=&page=` | Filtered, paginated blog listing |
//! | `GET` | `/api/posts/:slug` | One post |
//! | `GET` | `/api/tags` | Tags with post counts |
//! | `GET` | `/api/glossary?search=&tag=&anchor=` | Glossary grouped by letter |
//! | `GET` | `/health` | Health check |
//!
//! Errors are `{ "error": { "code": "...", "message": "..." } }`.

use anyhow::Result;
use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::content::Content;
use crate::listing::{tag_index, BlogListing, GlossaryView, ListingQuery, Paginator};
use crate::Site;

/// Shared server state. The loaded content is swapped as a whole on reload.
pub struct ServerState {
    site: Site,
    content: RwLock<Arc<Content>>,
    paginator: Paginator,
}

impl ServerState {
    pub fn new(site: Site, content: Content) -> Result<Self> {
        let paginator = site.paginator()?;
        Ok(Self {
            site,
            content: RwLock::new(Arc::new(content)),
            paginator,
        })
    }

    /// The current content snapshot
    pub fn snapshot(&self) -> Arc<Content> {
        let guard = self.content.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Reload content from disk, keeping the old snapshot on failure
    pub fn reload(&self) -> Result<()> {
        let content = self.site.load_content()?;
        let mut guard = self.content.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(content);
        Ok(())
    }
}

/// Build the router for a state
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/posts", get(posts_handler))
        .route("/api/posts/:slug", get(post_handler))
        .route("/api/tags", get(tags_handler))
        .route("/api/glossary", get(glossary_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    let content = site.load_content()?;
    let state = Arc::new(ServerState::new(site.clone(), content)?);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching content for changes...");
        let watch_state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(&watch_state) {
                tracing::error!("Content watcher error: {}", e);
            }
        });
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Reload content whenever the content directory or config changes
fn watch_and_reload(state: &ServerState) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let content_dir = &state.site.content_dir;
    if content_dir.exists() {
        debouncer
            .watcher()
            .watch(content_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", content_dir);
    }

    let config_path = state.site.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path = e.path.to_string_lossy();
                    !path.contains(".git") && !path.contains(".DS_Store") && !path.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                match state.reload() {
                    Ok(()) => tracing::info!("Content reloaded"),
                    Err(e) => tracing::error!("Reload failed, keeping previous content: {}", e),
                }
            }
            Ok(Err(e)) => tracing::error!("Watch error: {:?}", e),
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = serde_json::json!({ "error": { "code": code, "message": message } });
    (status, Json(body)).into_response()
}

async fn health_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

async fn posts_handler(State(state): State<Arc<ServerState>>, RawQuery(query): RawQuery) -> Response {
    let query = ListingQuery::parse(query.as_deref().unwrap_or(""));
    let content = state.snapshot();
    let listing = BlogListing::resolve(&content.posts, &query, state.paginator);
    Json(&listing).into_response()
}

async fn post_handler(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let content = state.snapshot();
    match content.post(&slug) {
        Some(post) => Json(post).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            &format!("no post with slug '{}'", slug),
        ),
    }
}

async fn tags_handler(State(state): State<Arc<ServerState>>) -> Response {
    let content = state.snapshot();
    Json(tag_index(&content.posts)).into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GlossaryParams {
    search: String,
    tag: Option<String>,
    anchor: Option<String>,
}

async fn glossary_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<GlossaryParams>,
) -> Response {
    let content = state.snapshot();
    let view = GlossaryView::build(
        &content.glossary,
        &params.search,
        params.tag.as_deref(),
        params.anchor.as_deref(),
    );
    Json(&view).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, GlossaryTerm};
    use chrono::NaiveDate;

    fn state() -> Arc<ServerState> {
        let dir = std::env::temp_dir();
        let site = Site::new(dir.join("lexblog-server-test-missing")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let posts = (0..12)
            .map(|i| {
                let mut post = BlogPost::new(&format!("Post {}", i), date);
                post.tags = vec!["law".to_string()];
                post
            })
            .collect();
        let glossary = vec![GlossaryTerm::new("Pailit", "Bankruptcy.")];
        Arc::new(ServerState::new(site, Content { posts, glossary }).unwrap())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_posts_listing() {
        let response = posts_handler(State(state()), RawQuery(Some("page=2&tag=LAW".to_string()))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_items"], 12);
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["posts"].as_array().unwrap().len(), 3);
        assert_eq!(json["query"]["page"], 2);
    }

    #[tokio::test]
    async fn test_post_not_found() {
        let response = post_handler(State(state()), Path("missing".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn test_post_found() {
        let response = post_handler(State(state()), Path("post-3".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["title"], "Post 3");
    }

    #[tokio::test]
    async fn test_tags() {
        let json = body_json(tags_handler(State(state())).await).await;
        assert_eq!(json[0]["name"], "law");
        assert_eq!(json[0]["count"], 12);
    }

    #[tokio::test]
    async fn test_glossary() {
        let params = GlossaryParams {
            anchor: Some("pailit".to_string()),
            ..Default::default()
        };
        let json = body_json(glossary_handler(State(state()), Query(params)).await).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["groups"]["P"][0]["term"], "Pailit");
        assert_eq!(json["expanded"]["term"], "Pailit");
    }

    #[test]
    fn test_reload_missing_dir_yields_empty() {
        let state = state();
        state.reload().unwrap();
        assert!(state.snapshot().posts.is_empty());
    }
}
