//! Manage page - GET|POST /manage

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ManageInput;
use crate::http::server::AppState;
use crate::render::render_manage;
use crate::views::manage;

/// GET|POST /manage - apply the submitted action, then list everything
async fn manage_page(
    State(state): State<Arc<AppState>>,
    ManageInput(request): ManageInput,
) -> Result<Html<String>, ApiError> {
    let view = manage::handle(state.store.as_ref(), &request).await?;
    Ok(Html(render_manage(&view)))
}

/// Manage routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/manage", get(manage_page).post(manage_page))
}
