use sqlx::PgPool;

use crate::domain::{
    common::entities::app_errors::CoreError,
    topic::{entities::Topic, ports::TopicRepository},
};
use crate::infrastructure::db::map_db_error;

#[derive(Debug, Clone)]
pub struct PostgresTopicRepository {
    pub pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TopicRepository for PostgresTopicRepository {
    async fn fetch_all(&self) -> Result<Vec<Topic>, CoreError> {
        sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Topic>, CoreError> {
        sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics WHERE slug = $1")
            .bind(&slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn insert(&self, topic: Topic) -> Result<Topic, CoreError> {
        sqlx::query_as::<_, Topic>(
            "INSERT INTO topics (slug, description) VALUES ($1, $2) \
             RETURNING slug, description",
        )
        .bind(&topic.slug)
        .bind(&topic.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
