//! Admin blog edit page.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

/// Admin edit page: direct primary-key lookup, no read-API hop.
///
/// GET /admin/blog/edit/{id}
///
/// A malformed id and a missing record both terminate with 404.
pub async fn edit_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| AppError::NotFound(format!("blog post '{raw_id}'")))?;

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog post '{raw_id}'")))?;

    let html = render::admin_edit_document(&blog);
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
