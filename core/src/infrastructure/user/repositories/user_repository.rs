use sqlx::PgPool;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::infrastructure::db::map_db_error;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_all(&self) -> Result<Vec<User>, CoreError> {
        sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(&username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
