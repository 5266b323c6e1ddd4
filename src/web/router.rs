use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{index, register, AppState};

/// Routes: `GET /` and `POST /register`; other methods on `/register` get 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
