use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentValidator {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "body is required"),
        length(min = 1, message = "body is required")
    )]
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentVotesValidator {
    #[validate(required(message = "inc_votes is required"))]
    pub inc_votes: Option<i32>,
}
