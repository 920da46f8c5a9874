use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleValidator {
    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author is required")
    )]
    pub author: Option<String>,

    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "body is required"),
        length(min = 1, message = "body is required")
    )]
    pub body: Option<String>,

    #[validate(
        required(message = "topic is required"),
        length(min = 1, message = "topic is required")
    )]
    pub topic: Option<String>,

    pub article_img_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleVotesValidator {
    #[validate(required(message = "inc_votes is required"))]
    pub inc_votes: Option<i32>,
}
