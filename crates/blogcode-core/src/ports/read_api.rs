use async_trait::async_trait;

use crate::domain::{BlogPost, RelatedPost};

/// Client for the internal blog read API.
///
/// Both operations are infallible by contract: a 404, any other non-success
/// status, and transport failures all collapse to an empty result. The page
/// layer cannot distinguish "missing" from "temporarily unreachable".
#[async_trait]
pub trait BlogReadApi: Send + Sync {
    /// `GET {base_url}/api/blog/{slug}`.
    async fn fetch_blog(&self, base_url: &str, slug: &str) -> Option<BlogPost>;

    /// `GET {base_url}/api/blog?relatedTo={slug}&limit={limit}`.
    async fn fetch_related(&self, base_url: &str, slug: &str, limit: u64) -> Vec<RelatedPost>;
}
