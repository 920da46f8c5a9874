use sqlx::PgPool;

use crate::domain::{
    comment::{entities::Comment, ports::CommentRepository, value_objects::NewComment},
    common::entities::{app_errors::CoreError, pagination::Pagination},
};
use crate::infrastructure::db::{map_db_error, query_builder::article_comments_query};

#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pub pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CommentRepository for PostgresCommentRepository {
    async fn fetch_by_article(
        &self,
        article_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Comment>, CoreError> {
        article_comments_query(article_id, pagination)
            .build_query_as::<Comment>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, CoreError> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) \
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn update_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> Result<Option<Comment>, CoreError> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 \
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn delete(&self, comment_id: i32) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
