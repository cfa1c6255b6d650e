//! Application state - shared across all handlers.

use std::sync::Arc;

use blogcode_core::domain::{BlogPost, RelatedPost};
use blogcode_core::error::RepoError;
use blogcode_core::ports::{BlogReadApi, BlogRepository};
use blogcode_infra::database::{DatabaseHandle, PostgresBlogRepository};
use blogcode_infra::http::HttpBlogReadApi;
use blogcode_infra::popup::PopupSignal;

use crate::base_url::BaseUrls;
use crate::config::AppConfig;

/// Shared application state. The database handle is the one long-lived
/// resource; it is built here once and shared by reference.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub read_api: Arc<dyn BlogReadApi>,
    pub db: Option<Arc<DatabaseHandle>>,
    pub base_urls: BaseUrls,
    pub popup_signal: PopupSignal,
}

/// Fallback repository for when the database is not configured.
pub struct InMemoryBlogRepository;

#[async_trait::async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, _id: uuid::Uuid) -> Result<Option<BlogPost>, RepoError> {
        tracing::warn!("Database not configured - using in-memory fallback");
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<BlogPost>, RepoError> {
        Ok(None)
    }

    async fn find_related(
        &self,
        _exclude_slug: &str,
        _limit: u64,
    ) -> Result<Vec<RelatedPost>, RepoError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(0)
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (db, blogs): (Option<Arc<DatabaseHandle>>, Arc<dyn BlogRepository>) = {
            if let Some(db_config) = &config.database {
                match DatabaseHandle::connect(db_config).await {
                    Ok(handle) => {
                        let handle = Arc::new(handle);
                        let repo = Arc::new(PostgresBlogRepository::new(handle.conn().clone()));
                        (Some(handle), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryBlogRepository))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryBlogRepository))
            }
        };

        tracing::info!("Application state initialized");

        Self {
            blogs,
            read_api: Arc::new(HttpBlogReadApi::new()),
            db,
            base_urls: config.base_urls.clone(),
            popup_signal: PopupSignal::new(),
        }
    }
}
