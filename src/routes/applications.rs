//! Job application routes.

use crate::handlers::applications::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn application_routes(state: AppState) -> Router {
    Router::new()
        .route("/applications", get(list).post(create))
        .route("/applications/:id", put(update).delete(delete_handler))
        .with_state(state)
}
