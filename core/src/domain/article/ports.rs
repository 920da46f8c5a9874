use crate::domain::{
    article::{
        entities::{Article, ArticlePage},
        value_objects::{ArticleListQuery, CreateArticleInput, ListArticlesInput, NewArticle},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait ArticleService: Send + Sync {
    fn get_articles(
        &self,
        input: ListArticlesInput,
    ) -> impl Future<Output = Result<ArticlePage, CoreError>> + Send;

    fn get_article(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<Article, CoreError>> + Send;

    fn create_article(
        &self,
        input: CreateArticleInput,
    ) -> impl Future<Output = Result<Article, CoreError>> + Send;

    fn update_article_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Article, CoreError>> + Send;

    fn delete_article(&self, article_id: i32)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    fn fetch_page(
        &self,
        query: ArticleListQuery,
    ) -> impl Future<Output = Result<ArticlePage, CoreError>> + Send;

    fn get_by_id(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<Option<Article>, CoreError>> + Send;

    fn insert(&self, article: NewArticle)
    -> impl Future<Output = Result<Article, CoreError>> + Send;

    /// `None` when the id matched no row; the update itself is the
    /// existence check.
    fn update_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Option<Article>, CoreError>> + Send;

    /// Deletes the article and its comments in one transaction. Returns
    /// whether an article row was actually removed.
    fn delete_cascade(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn exists(&self, article_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
