use super::handlers::create_topic::{__path_create_topic, create_topic};
use super::handlers::get_topics::{__path_get_topics, get_topics};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_topics, create_topic))]
pub struct TopicApiDoc;

pub fn topic_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/topics", state.args.server.root_path),
            get(get_topics),
        )
        .route(
            &format!("{}/topics", state.args.server.root_path),
            post(create_topic),
        )
}
