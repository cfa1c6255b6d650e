//! Data Transfer Objects - request/response types for the read API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the related-posts listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPostDto {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
}

/// Envelope of `GET /api/blog?relatedTo={slug}&limit={n}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPostsResponse {
    pub data: Vec<RelatedPostDto>,
}

/// Query parameters of the related-posts listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPostsQuery {
    pub related_to: Option<String>,
    pub limit: Option<u64>,
}
