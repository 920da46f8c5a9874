use super::handlers::create_comment::{__path_create_comment, create_comment};
use super::handlers::delete_comment::{__path_delete_comment, delete_comment};
use super::handlers::get_article_comments::{__path_get_article_comments, get_article_comments};
use super::handlers::update_comment::{__path_update_comment, update_comment};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_article_comments,
    create_comment,
    update_comment,
    delete_comment
))]
pub struct CommentApiDoc;

pub fn comment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/articles/{{article_id}}/comments",
                state.args.server.root_path
            ),
            get(get_article_comments),
        )
        .route(
            &format!(
                "{}/articles/{{article_id}}/comments",
                state.args.server.root_path
            ),
            post(create_comment),
        )
        .route(
            &format!("{}/comments/{{comment_id}}", state.args.server.root_path),
            patch(update_comment),
        )
        .route(
            &format!("{}/comments/{{comment_id}}", state.args.server.root_path),
            delete(delete_comment),
        )
}
