use crate::domain::{
    article::{
        entities::{Article, ArticlePage, DEFAULT_ARTICLE_IMG_URL},
        ports::{ArticleRepository, ArticleService},
        value_objects::{ArticleListQuery, CreateArticleInput, ListArticlesInput, NewArticle},
    },
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    topic::ports::TopicRepository,
    user::ports::UserRepository,
};

impl<T, A, C, U> ArticleService for Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    async fn get_articles(&self, input: ListArticlesInput) -> Result<ArticlePage, CoreError> {
        let query = ArticleListQuery::from_input(input)?;

        // A filter naming a missing topic is 404; an existing topic with no
        // articles is a valid empty page. The two must not be conflated.
        if let Some(topic) = &query.topic {
            self.topic_repository
                .get_by_slug(topic.clone())
                .await?
                .ok_or(CoreError::TopicNotFound)?;
        }

        let page = self.article_repository.fetch_page(query.clone()).await?;

        if query.pagination.is_out_of_range(page.articles.len()) {
            return Err(CoreError::PageOutOfRange);
        }

        Ok(page)
    }

    async fn get_article(&self, article_id: i32) -> Result<Article, CoreError> {
        self.article_repository
            .get_by_id(article_id)
            .await?
            .ok_or(CoreError::ArticleNotFound)
    }

    async fn create_article(&self, input: CreateArticleInput) -> Result<Article, CoreError> {
        let author = input.author.filter(|field| !field.is_empty());
        let title = input.title.filter(|field| !field.is_empty());
        let body = input.body.filter(|field| !field.is_empty());
        let topic = input.topic.filter(|field| !field.is_empty());

        let (Some(author), Some(title), Some(body), Some(topic)) = (author, title, body, topic)
        else {
            return Err(CoreError::MissingFields(
                "Author, title, body and topic required".to_string(),
            ));
        };

        let article_img_url = input
            .article_img_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string());

        self.article_repository
            .insert(NewArticle {
                author,
                title,
                body,
                topic,
                article_img_url,
            })
            .await
    }

    async fn update_article_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> Result<Article, CoreError> {
        self.article_repository
            .update_votes(article_id, inc_votes)
            .await?
            .ok_or(CoreError::ArticleNotFound)
    }

    async fn delete_article(&self, article_id: i32) -> Result<(), CoreError> {
        if !self.article_repository.delete_cascade(article_id).await? {
            return Err(CoreError::ArticleNotFound);
        }
        Ok(())
    }
}
