//! SQL construction for the listing endpoints.
//!
//! Every user-controlled value is bound as a parameter. The single
//! exception is the `ORDER BY` clause: column names and order keywords
//! cannot be bound in Postgres, so they are spliced into the statement
//! text. That is only safe because both values come from the closed
//! `ArticleSortColumn`/`SortOrder` sets and cannot carry arbitrary input.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::{
    article::value_objects::ArticleListQuery, common::entities::pagination::Pagination,
};

/// Listing query for articles: one row per article with its live comment
/// count, plus a window aggregate with the total matching row count before
/// pagination is applied.
pub fn article_list_query(query: &ArticleListQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT articles.article_id, articles.author, articles.title, articles.topic, \
         articles.article_img_url, articles.votes, articles.created_at, \
         COUNT(comments.comment_id) AS comment_count, \
         COUNT(*) OVER () AS total_count \
         FROM articles \
         LEFT JOIN comments ON articles.article_id = comments.article_id",
    );

    if let Some(topic) = &query.topic {
        builder.push(" WHERE articles.topic = ");
        builder.push_bind(topic.as_str());
    }

    builder.push(" GROUP BY articles.article_id");
    builder.push(format!(
        " ORDER BY {} {}",
        query.sort.as_sql(),
        query.order.as_sql()
    ));
    push_pagination(&mut builder, query.pagination);

    builder
}

/// Comments for one article, newest first.
pub fn article_comments_query(
    article_id: i32,
    pagination: Pagination,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT comment_id, article_id, author, body, votes, created_at \
         FROM comments WHERE article_id = ",
    );
    builder.push_bind(article_id);
    builder.push(" ORDER BY created_at DESC");
    push_pagination(&mut builder, pagination);

    builder
}

/// `LIMIT` is always present; `OFFSET` only when a later page was asked for.
fn push_pagination(builder: &mut QueryBuilder<'_, Postgres>, pagination: Pagination) {
    builder.push(" LIMIT ");
    builder.push_bind(pagination.limit());
    if pagination.offset() > 0 {
        builder.push(" OFFSET ");
        builder.push_bind(pagination.offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleSortColumn, SortOrder};

    fn base_query() -> ArticleListQuery {
        ArticleListQuery {
            sort: ArticleSortColumn::CreatedAt,
            order: SortOrder::Desc,
            topic: None,
            pagination: Pagination::default(),
        }
    }

    #[test]
    fn default_listing_has_no_filter_and_no_offset() {
        let query = base_query();
        let builder = article_list_query(&query);
        let sql = builder.sql();
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY created_at DESC"));
        assert!(sql.contains("LIMIT $1"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn topic_filter_binds_a_placeholder() {
        let query = ArticleListQuery {
            topic: Some("cats".to_string()),
            ..base_query()
        };
        let builder = article_list_query(&query);
        let sql = builder.sql();
        assert!(sql.contains("WHERE articles.topic = $1"));
        assert!(sql.contains("LIMIT $2"));
        assert!(!sql.contains("cats"));
    }

    #[test]
    fn later_pages_bind_an_offset() {
        let query = ArticleListQuery {
            pagination: Pagination::from_raw(Some(5), Some(3)).unwrap(),
            ..base_query()
        };
        let builder = article_list_query(&query);
        let sql = builder.sql();
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn sort_column_and_order_are_spliced_as_text() {
        let query = ArticleListQuery {
            sort: ArticleSortColumn::CommentCount,
            order: SortOrder::Asc,
            ..base_query()
        };
        let builder = article_list_query(&query);
        assert!(builder.sql().contains("ORDER BY comment_count ASC"));
    }

    #[test]
    fn listing_reports_the_total_before_pagination() {
        let query = base_query();
        let builder = article_list_query(&query);
        assert!(builder.sql().contains("COUNT(*) OVER () AS total_count"));
    }

    #[test]
    fn comment_listing_is_newest_first() {
        let builder = article_comments_query(1, Pagination::default());
        let sql = builder.sql();
        assert!(sql.contains("WHERE article_id = $1"));
        assert!(sql.contains("ORDER BY created_at DESC"));
        assert!(sql.contains("LIMIT $2"));
    }
}
