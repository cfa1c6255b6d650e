//! Enquiry popup open signal.

use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// Broadcast the "open the enquiry popup" signal to mounted controllers.
/// Publishing with no listeners is a no-op.
///
/// POST /api/enquiry/open
pub async fn open_popup(state: web::Data<AppState>) -> HttpResponse {
    state.popup_signal.open();
    HttpResponse::NoContent().finish()
}
