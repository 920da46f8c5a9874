use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Image applied when a new article omits `article_img_url`.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// A single article as returned by the detail, create and patch endpoints.
///
/// `comment_count` is never stored; every query computes it from the live
/// comment set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Article {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

/// Listing shape: everything but the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ArticlePreview {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub article_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

/// One page of a listing plus the size of the full matching set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticlePage {
    pub articles: Vec<ArticlePreview>,
    pub total_count: i64,
}
