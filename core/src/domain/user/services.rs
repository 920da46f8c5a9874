use crate::domain::{
    article::ports::ArticleRepository,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    topic::ports::TopicRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
};

impl<T, A, C, U> UserService for Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    async fn get_users(&self) -> Result<Vec<User>, CoreError> {
        self.user_repository.fetch_all().await
    }

    async fn get_user_by_username(&self, username: String) -> Result<User, CoreError> {
        self.user_repository
            .get_by_username(username)
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}
