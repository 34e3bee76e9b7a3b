pub mod blogs;
pub mod health;
pub mod notifications;
pub mod profile;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .route("/ping", get(health::ping_handler))
        .route("/myprofile/:userid", get(profile::render_profile))
        .route("/blogs/", get(blogs::render_blog_list))
        .route("/blogs/:blogid", get(blogs::render_blog))
        .route(
            "/notifications/email/myprofile",
            get(notifications::request_form).post(notifications::dispatch_request),
        )
        .route("/success", post(notifications::render_success))
        .nest_service("/images", ServeDir::new(format!("{static_dir}/images")))
        .nest_service("/js", ServeDir::new(format!("{static_dir}/js")))
        .with_state(state)
}
