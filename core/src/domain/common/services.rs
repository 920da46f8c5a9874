use crate::domain::{
    article::ports::ArticleRepository, comment::ports::CommentRepository,
    topic::ports::TopicRepository, user::ports::UserRepository,
};

/// Aggregate over the four entity repositories. The entity services are
/// implemented as trait impls on this struct, so a single injected value
/// serves the whole HTTP surface.
#[derive(Debug, Clone)]
pub struct Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub topic_repository: T,
    pub article_repository: A,
    pub comment_repository: C,
    pub user_repository: U,
}

impl<T, A, C, U> Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(
        topic_repository: T,
        article_repository: A,
        comment_repository: C,
        user_repository: U,
    ) -> Self {
        Self {
            topic_repository,
            article_repository,
            comment_repository,
            user_repository,
        }
    }
}
