use axum::{http::StatusCode, routing::get, Router};

use crate::server::{
    controller::{
        interaction::{interactions, liveness},
        whitelist::get_whitelist,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bot", get(liveness).post(interactions).fallback(not_found))
        .route("/whitelist", get(get_whitelist).fallback(not_found))
        .fallback(not_found)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found.")
}
