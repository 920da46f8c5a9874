use crate::domain::common::{NewswireConfig, services::Service};
use crate::infrastructure::{
    article::repositories::article_repository::PostgresArticleRepository,
    comment::repositories::comment_repository::PostgresCommentRepository,
    db::postgres::{Postgres, PostgresConfig},
    topic::repositories::topic_repository::PostgresTopicRepository,
    user::repositories::user_repository::PostgresUserRepository,
};

pub type NewswireService = Service<
    PostgresTopicRepository,
    PostgresArticleRepository,
    PostgresCommentRepository,
    PostgresUserRepository,
>;

/// Builds the connection pool and wires every repository into one service
/// value. The pool is created here, at startup, and only ever handed down;
/// nothing in the domain reaches for process-wide state.
pub async fn create_service(config: NewswireConfig) -> Result<NewswireService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let pool = postgres.get_pool();

    Ok(Service::new(
        PostgresTopicRepository::new(pool.clone()),
        PostgresArticleRepository::new(pool.clone()),
        PostgresCommentRepository::new(pool.clone()),
        PostgresUserRepository::new(pool),
    ))
}
