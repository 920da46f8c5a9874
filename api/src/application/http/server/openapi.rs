use std::collections::BTreeMap;

use crate::application::http::{
    article::router::ArticleApiDoc, comment::router::CommentApiDoc, topic::router::TopicApiDoc,
    user::router::UserApiDoc,
};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::OpenApi;
use utoipa::ToSchema;
use utoipa::openapi::{
    HttpMethod,
    path::{Operation, PathItem},
};

// utoipa's derive rejects `path = ""` as a literal; routing the empty
// prefix through a const keeps the comment routes nested at the root.
const COMMENT_NEST_PATH: &str = "";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newswire API"
    ),
    paths(get_api),
    nest(
        (path = "/topics", api = TopicApiDoc),
        (path = "/articles", api = ArticleApiDoc),
        (path = COMMENT_NEST_PATH, api = CommentApiDoc),
        (path = "/users", api = UserApiDoc),
    )
)]
pub struct ApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EndpointDescription {
    pub summary: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetApiResponse {
    pub endpoints: BTreeMap<String, EndpointDescription>,
}

/// utoipa's `PathItem` stores each method's operation in its own field;
/// this flattens them back into the (method, operation) pairs we iterate.
fn operations(item: PathItem) -> impl Iterator<Item = (HttpMethod, Operation)> {
    [
        (HttpMethod::Get, item.get),
        (HttpMethod::Put, item.put),
        (HttpMethod::Post, item.post),
        (HttpMethod::Delete, item.delete),
        (HttpMethod::Options, item.options),
        (HttpMethod::Head, item.head),
        (HttpMethod::Patch, item.patch),
        (HttpMethod::Trace, item.trace),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|operation| (method, operation)))
}

fn method_name(method: &HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET",
        HttpMethod::Post => "POST",
        HttpMethod::Put => "PUT",
        HttpMethod::Delete => "DELETE",
        HttpMethod::Options => "OPTIONS",
        HttpMethod::Head => "HEAD",
        HttpMethod::Patch => "PATCH",
        HttpMethod::Trace => "TRACE",
    }
}

/// The endpoint catalog is derived from the same document that feeds
/// Swagger UI, so it cannot drift from the routes actually served.
#[utoipa::path(
    get,
    path = "",
    tag = "api",
    summary = "Get endpoint catalog",
    description = "Describes every endpoint this server exposes.",
    responses(
        (status = 200, body = GetApiResponse)
    ),
)]
pub async fn get_api(State(state): State<AppState>) -> Result<Response<GetApiResponse>, ApiError> {
    let root_path = &state.args.server.root_path;
    let openapi = ApiDoc::openapi();

    let mut endpoints = BTreeMap::new();
    for (path, item) in openapi.paths.paths {
        for (method, operation) in operations(item) {
            let key = format!("{} {root_path}{path}", method_name(&method));
            endpoints.insert(
                key,
                EndpointDescription {
                    summary: operation.summary,
                    description: operation.description,
                },
            );
        }
    }

    Ok(Response::OK(GetApiResponse { endpoints }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_documented_operation() {
        let openapi = ApiDoc::openapi();
        let operations: usize = openapi
            .paths
            .paths
            .values()
            .map(|item| operations(item.clone()).count())
            .sum();
        // 1 catalog + 2 topics + 5 articles + 4 comments + 2 users.
        assert_eq!(operations, 14);
    }

    #[test]
    fn nested_paths_keep_their_prefixes() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/topics"));
        assert!(openapi.paths.paths.contains_key("/articles/{article_id}"));
        assert!(
            openapi
                .paths
                .paths
                .contains_key("/articles/{article_id}/comments")
        );
        assert!(openapi.paths.paths.contains_key("/users/{username}"));
    }
}
