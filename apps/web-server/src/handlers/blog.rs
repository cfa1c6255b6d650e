//! Public blog detail page.

use actix_web::{HttpRequest, HttpResponse, web};

use crate::base_url::host_header;
use crate::middleware::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

/// How many related posts the detail page asks for.
const RELATED_LIMIT: u64 = 3;

/// Blog detail page.
///
/// GET /blog/{slug}
///
/// Goes through the internal read API rather than the repository, like the
/// rest of the public surface. A missing or unreachable record is a 404;
/// related-post failures never block the page.
pub async fn blog_detail(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let base_url = state.base_urls.resolve(host_header(&req));

    let Some(blog) = state.read_api.fetch_blog(&base_url, &slug).await else {
        return Err(AppError::NotFound(format!("blog post '{slug}'")));
    };

    let related = state
        .read_api
        .fetch_related(&base_url, &slug, RELATED_LIMIT)
        .await;

    let html = render::blog_detail_document(&blog, &related, &base_url);
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
