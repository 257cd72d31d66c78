//! Blog routes: posts and comments.

use crate::handlers::{comments, posts};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(posts::list).post(posts::create))
        .route("/comments", post(comments::create))
        .with_state(state)
}
