use crate::domain::{
    comment::{
        entities::Comment,
        value_objects::{CreateCommentInput, ListCommentsInput, NewComment},
    },
    common::entities::{app_errors::CoreError, pagination::Pagination},
};

#[cfg_attr(test, mockall::automock)]
pub trait CommentService: Send + Sync {
    fn get_article_comments(
        &self,
        article_id: i32,
        input: ListCommentsInput,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn create_comment(
        &self,
        article_id: i32,
        input: CreateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn update_comment_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(&self, comment_id: i32)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    fn fetch_by_article(
        &self,
        article_id: i32,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn insert(&self, comment: NewComment)
    -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn update_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;

    /// Single-statement delete; the rows-affected count doubles as the
    /// existence check so concurrent deletes cannot race.
    fn delete(&self, comment_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
