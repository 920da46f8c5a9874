use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::domain::{
    article::{
        entities::{Article, ArticlePage, ArticlePreview},
        ports::ArticleRepository,
        value_objects::{ArticleListQuery, NewArticle},
    },
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::db::{map_db_error, query_builder::article_list_query};

#[derive(Debug, Clone)]
pub struct PostgresArticleRepository {
    pub pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the listing query: a preview plus the window total.
#[derive(Debug, FromRow)]
struct ArticleListRow {
    article_id: i32,
    author: String,
    title: String,
    topic: String,
    article_img_url: String,
    votes: i32,
    created_at: DateTime<Utc>,
    comment_count: i64,
    total_count: i64,
}

impl From<ArticleListRow> for ArticlePreview {
    fn from(row: ArticleListRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            topic: row.topic,
            article_img_url: row.article_img_url,
            votes: row.votes,
            created_at: row.created_at,
            comment_count: row.comment_count,
        }
    }
}

impl ArticleRepository for PostgresArticleRepository {
    async fn fetch_page(&self, query: ArticleListQuery) -> Result<ArticlePage, CoreError> {
        let rows = article_list_query(&query)
            .build_query_as::<ArticleListRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        // Every row carries the same window total; an empty page means an
        // empty matching set (or a page past the end, which the service
        // layer distinguishes).
        let total_count = rows.first().map(|row| row.total_count).unwrap_or(0);
        let articles = rows.into_iter().map(ArticlePreview::from).collect();

        Ok(ArticlePage {
            articles,
            total_count,
        })
    }

    async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, CoreError> {
        sqlx::query_as::<_, Article>(
            "SELECT articles.article_id, articles.author, articles.title, articles.body, \
             articles.topic, articles.article_img_url, articles.votes, articles.created_at, \
             COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON articles.article_id = comments.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id",
        )
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn insert(&self, article: NewArticle) -> Result<Article, CoreError> {
        sqlx::query_as::<_, Article>(
            "INSERT INTO articles (author, title, body, topic, article_img_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING article_id, author, title, body, topic, article_img_url, votes, \
             created_at, 0::BIGINT AS comment_count",
        )
        .bind(&article.author)
        .bind(&article.title)
        .bind(&article.body)
        .bind(&article.topic)
        .bind(&article.article_img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn update_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> Result<Option<Article>, CoreError> {
        sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 \
             RETURNING article_id, author, title, body, topic, article_img_url, votes, \
             created_at, \
             (SELECT COUNT(*) FROM comments \
              WHERE comments.article_id = articles.article_id) AS comment_count",
        )
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn delete_cascade(&self, article_id: i32) -> Result<bool, CoreError> {
        // Comments and article go in one transaction so a failure can never
        // leave orphaned comments behind.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let deleted = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(deleted.rows_affected() > 0)
    }

    async fn exists(&self, article_id: i32) -> Result<bool, CoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
