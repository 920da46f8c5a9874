#[derive(Debug, Clone, Default)]
pub struct CreateCommentInput {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// Validated comment insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub article_id: i32,
    pub author: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommentsInput {
    pub limit: Option<i64>,
    pub p: Option<i64>,
}
