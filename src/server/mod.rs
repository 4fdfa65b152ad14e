//! Web front end.
//!
//! Serves the search page and a small statistics page over a shared index
//! snapshot:
//!
//! - `GET /`: empty search page
//! - `POST /`: search with the `query` form field
//! - `GET /data/`: number of indexed committees
//!
//! Every other path is served by the search page handlers.

pub mod handlers;
pub mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use url::Url;

use crate::error::Result;
use crate::models::ServerConfig;
use crate::storage::IndexStore;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IndexStore>,
    /// Base address result links point at
    pub base_url: Url,
    pub template_path: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<IndexStore>, base_url: Url, template_path: impl AsRef<Path>) -> Self {
        Self {
            store,
            base_url,
            template_path: template_path.as_ref().to_path_buf(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let search = get(handlers::index_page).post(handlers::search_page);

    // Any path outside `/data/` is the search page.
    Router::new()
        .route("/", search.clone())
        .route("/{*path}", search)
        .route("/data", get(handlers::data_page))
        .route("/data/", get(handlers::data_page))
        .route("/data/{*path}", get(handlers::data_page))
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
