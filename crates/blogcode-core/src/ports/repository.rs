use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, RelatedPost};
use crate::error::RepoError;

/// Read access to persisted blog posts.
///
/// This system only reads; writes go through the admin form collaborator.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Primary-key lookup - the admin edit flow.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Public lookup by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Newest posts excluding the given slug, up to `limit`.
    async fn find_related(&self, exclude_slug: &str, limit: u64)
    -> Result<Vec<RelatedPost>, RepoError>;

    /// Total number of posts. Used by the diagnostic entry point.
    async fn count(&self) -> Result<u64, RepoError>;
}
