use crate::domain::{
    article::ports::ArticleRepository,
    comment::{
        entities::Comment,
        ports::{CommentRepository, CommentService},
        value_objects::{CreateCommentInput, ListCommentsInput, NewComment},
    },
    common::{
        entities::{app_errors::CoreError, pagination::Pagination},
        services::Service,
    },
    topic::ports::TopicRepository,
    user::ports::UserRepository,
};

impl<T, A, C, U> CommentService for Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    async fn get_article_comments(
        &self,
        article_id: i32,
        input: ListCommentsInput,
    ) -> Result<Vec<Comment>, CoreError> {
        let pagination = Pagination::from_raw(input.limit, input.p)?;

        if !self.article_repository.exists(article_id).await? {
            return Err(CoreError::ArticleNotFound);
        }

        let comments = self
            .comment_repository
            .fetch_by_article(article_id, pagination)
            .await?;

        if pagination.is_out_of_range(comments.len()) {
            return Err(CoreError::PageOutOfRange);
        }

        Ok(comments)
    }

    async fn create_comment(
        &self,
        article_id: i32,
        input: CreateCommentInput,
    ) -> Result<Comment, CoreError> {
        let username = input.username.filter(|field| !field.is_empty());
        let body = input.body.filter(|field| !field.is_empty());

        let (Some(username), Some(body)) = (username, body) else {
            return Err(CoreError::MissingFields(
                "Username and body required".to_string(),
            ));
        };

        if !self.article_repository.exists(article_id).await? {
            return Err(CoreError::ArticleNotFound);
        }

        self.comment_repository
            .insert(NewComment {
                article_id,
                author: username,
                body,
            })
            .await
    }

    async fn update_comment_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> Result<Comment, CoreError> {
        self.comment_repository
            .update_votes(comment_id, inc_votes)
            .await?
            .ok_or(CoreError::CommentNotFound)
    }

    async fn delete_comment(&self, comment_id: i32) -> Result<(), CoreError> {
        if !self.comment_repository.delete(comment_id).await? {
            return Err(CoreError::CommentNotFound);
        }
        Ok(())
    }
}
