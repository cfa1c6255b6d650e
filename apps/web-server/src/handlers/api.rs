//! Internal blog read API.

use actix_web::{HttpResponse, web};

use blogcode_shared::dto::{RelatedPostDto, RelatedPostsQuery, RelatedPostsResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_RELATED_LIMIT: u64 = 3;
const MAX_RELATED_LIMIT: u64 = 12;

/// Single record by slug.
///
/// GET /api/blog/{slug}
pub async fn blog_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    match state.blogs.find_by_slug(&slug).await? {
        Some(blog) => Ok(HttpResponse::Ok().json(blog)),
        None => Err(AppError::NotFound(format!("blog post '{slug}'"))),
    }
}

/// Related-posts listing: newest first, requested slug excluded.
///
/// GET /api/blog?relatedTo={slug}&limit={n}
pub async fn related_posts(
    state: web::Data<AppState>,
    query: web::Query<RelatedPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let exclude = query.related_to.unwrap_or_default();
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RELATED_LIMIT)
        .min(MAX_RELATED_LIMIT);

    let related = state.blogs.find_related(&exclude, limit).await?;

    let data = related
        .into_iter()
        .map(|item| RelatedPostDto {
            id: item.id,
            slug: item.slug,
            title: item.title,
        })
        .collect();

    Ok(HttpResponse::Ok().json(RelatedPostsResponse { data }))
}
