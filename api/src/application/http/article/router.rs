use super::handlers::create_article::{__path_create_article, create_article};
use super::handlers::delete_article::{__path_delete_article, delete_article};
use super::handlers::get_article::{__path_get_article, get_article};
use super::handlers::get_articles::{__path_get_articles, get_articles};
use super::handlers::update_article::{__path_update_article, update_article};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_articles,
    get_article,
    create_article,
    update_article,
    delete_article
))]
pub struct ArticleApiDoc;

pub fn article_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/articles", state.args.server.root_path),
            get(get_articles),
        )
        .route(
            &format!("{}/articles/{{article_id}}", state.args.server.root_path),
            get(get_article),
        )
        .route(
            &format!("{}/articles", state.args.server.root_path),
            post(create_article),
        )
        .route(
            &format!("{}/articles/{{article_id}}", state.args.server.root_path),
            patch(update_article),
        )
        .route(
            &format!("{}/articles/{{article_id}}", state.args.server.root_path),
            delete(delete_article),
        )
}
