//! Public display page - GET /

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use chrono::Local;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::render::render_display;
use crate::views::display;

/// GET / - random or today's entries, per configuration
async fn show(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let view = display::prepare(state.store.as_ref(), &state.display, Local::now()).await?;
    Ok(Html(render_display(&view)))
}

/// Display routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show))
}
