use std::str::FromStr;

use crate::domain::common::entities::{app_errors::CoreError, pagination::Pagination};

/// Allow-list of sortable listing columns.
///
/// Sort columns cannot be bound as query parameters, so the only safe way to
/// apply them is interpolating `as_sql` into the statement text after the
/// value has parsed into this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    Votes,
    ArticleImgUrl,
    CommentCount,
    #[default]
    CreatedAt,
}

impl ArticleSortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            ArticleSortColumn::Author => "author",
            ArticleSortColumn::Title => "title",
            ArticleSortColumn::ArticleId => "article_id",
            ArticleSortColumn::Topic => "topic",
            ArticleSortColumn::Votes => "votes",
            ArticleSortColumn::ArticleImgUrl => "article_img_url",
            ArticleSortColumn::CommentCount => "comment_count",
            ArticleSortColumn::CreatedAt => "created_at",
        }
    }
}

impl FromStr for ArticleSortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(ArticleSortColumn::Author),
            "title" => Ok(ArticleSortColumn::Title),
            "article_id" => Ok(ArticleSortColumn::ArticleId),
            "topic" => Ok(ArticleSortColumn::Topic),
            "votes" => Ok(ArticleSortColumn::Votes),
            "article_img_url" => Ok(ArticleSortColumn::ArticleImgUrl),
            "comment_count" => Ok(ArticleSortColumn::CommentCount),
            "created_at" => Ok(ArticleSortColumn::CreatedAt),
            _ => Err(CoreError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CoreError::InvalidInput),
        }
    }
}

/// Raw listing parameters as they arrived on the request.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesInput {
    pub sorted_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<i64>,
    pub p: Option<i64>,
}

/// Fully validated listing parameters, ready for the query builder.
#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub sort: ArticleSortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
    pub pagination: Pagination,
}

impl ArticleListQuery {
    pub fn from_input(input: ListArticlesInput) -> Result<Self, CoreError> {
        let sort = input
            .sorted_by
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        let order = input
            .order
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        let pagination = Pagination::from_raw(input.limit, input.p)?;

        Ok(Self {
            sort,
            order,
            topic: input.topic,
            pagination,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateArticleInput {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    pub article_img_url: Option<String>,
}

/// Validated insert payload with the image default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
}
