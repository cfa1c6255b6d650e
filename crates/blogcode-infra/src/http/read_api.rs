use async_trait::async_trait;
use reqwest::StatusCode;

use blogcode_core::domain::{BlogPost, RelatedPost};
use blogcode_core::ports::BlogReadApi;
use blogcode_shared::dto::RelatedPostsResponse;

/// reqwest-backed client for the internal blog read API.
///
/// Failure collapse is deliberate: 404, any other non-success status, and
/// transport errors all become empty results. Non-404 failures are logged so
/// an outage is still visible in the logs.
pub struct HttpBlogReadApi {
    client: reqwest::Client,
}

impl HttpBlogReadApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpBlogReadApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogReadApi for HttpBlogReadApi {
    async fn fetch_blog(&self, base_url: &str, slug: &str) -> Option<BlogPost> {
        let url = format!("{base_url}/api/blog/{slug}");

        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(%url, error = %err, "Blog fetch request failed");
                return None;
            }
        };

        if res.status() == StatusCode::NOT_FOUND {
            return None;
        }

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            tracing::error!(%url, %status, body = %body, "Blog fetch failed");
            return None;
        }

        match res.json::<BlogPost>().await {
            Ok(blog) => Some(blog),
            Err(err) => {
                tracing::error!(%url, error = %err, "Blog fetch returned invalid JSON");
                None
            }
        }
    }

    async fn fetch_related(&self, base_url: &str, slug: &str, limit: u64) -> Vec<RelatedPost> {
        let url = format!("{base_url}/api/blog?relatedTo={slug}&limit={limit}");

        let res = match self.client.get(&url).send().await {
            Ok(res) if res.status().is_success() => res,
            Ok(res) => {
                tracing::warn!(%url, status = %res.status(), "Related fetch failed");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "Related fetch request failed");
                return Vec::new();
            }
        };

        match res.json::<RelatedPostsResponse>().await {
            Ok(envelope) => envelope
                .data
                .into_iter()
                .map(|item| RelatedPost {
                    id: item.id,
                    slug: item.slug,
                    title: item.title,
                })
                .collect(),
            Err(err) => {
                tracing::warn!(%url, error = %err, "Related fetch returned invalid JSON");
                Vec::new()
            }
        }
    }
}
