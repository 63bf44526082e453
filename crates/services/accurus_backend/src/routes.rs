// --- File: crates/services/accurus_backend/src/routes.rs ---
use axum::{routing::get, Router};

use crate::app_state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the AccurusBill API!";

/// All API routes, nested under `/api`.
pub fn api_router(state: &AppState) -> Router {
    let router = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(accurus_contact::routes::routes(state.contact_state()));

    Router::new().nest("/api", router)
}
