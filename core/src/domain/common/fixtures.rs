//! In-memory repository fakes shared by the service tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{Duration, Utc};

use crate::domain::{
    article::{
        entities::{Article, ArticlePage, ArticlePreview},
        ports::ArticleRepository,
        value_objects::{ArticleListQuery, NewArticle},
    },
    comment::{entities::Comment, ports::CommentRepository, value_objects::NewComment},
    common::{
        entities::{app_errors::CoreError, pagination::Pagination},
        services::Service,
    },
    topic::{entities::Topic, ports::TopicRepository},
    user::{entities::User, ports::UserRepository},
};

#[derive(Debug, Default)]
pub struct InMemoryDb {
    topics: Mutex<Vec<Topic>>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
    users: Mutex<Vec<User>>,
    topic_inserts: AtomicUsize,
    article_fetches: AtomicUsize,
    article_inserts: AtomicUsize,
    comment_inserts: AtomicUsize,
}

#[derive(Debug, Clone)]
pub struct InMemoryTopicRepository(Arc<InMemoryDb>);

#[derive(Debug, Clone)]
pub struct InMemoryArticleRepository(Arc<InMemoryDb>);

#[derive(Debug, Clone)]
pub struct InMemoryCommentRepository(Arc<InMemoryDb>);

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository(Arc<InMemoryDb>);

impl InMemoryTopicRepository {
    pub fn insert_calls(&self) -> usize {
        self.0.topic_inserts.load(Ordering::SeqCst)
    }
}

impl InMemoryArticleRepository {
    pub fn fetch_calls(&self) -> usize {
        self.0.article_fetches.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.0.article_inserts.load(Ordering::SeqCst)
    }
}

impl InMemoryCommentRepository {
    pub fn insert_calls(&self) -> usize {
        self.0.comment_inserts.load(Ordering::SeqCst)
    }

    pub fn comments_for(&self, article_id: i32) -> Vec<Comment> {
        self.0
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect()
    }
}

impl TopicRepository for InMemoryTopicRepository {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Topic>, CoreError>> + Send {
        let topics = self.0.topics.lock().unwrap().clone();
        async move { Ok(topics) }
    }

    fn get_by_slug(
        &self,
        slug: String,
    ) -> impl Future<Output = Result<Option<Topic>, CoreError>> + Send {
        let topic = self
            .0
            .topics
            .lock()
            .unwrap()
            .iter()
            .find(|topic| topic.slug == slug)
            .cloned();
        async move { Ok(topic) }
    }

    fn insert(&self, topic: Topic) -> impl Future<Output = Result<Topic, CoreError>> + Send {
        self.0.topic_inserts.fetch_add(1, Ordering::SeqCst);
        let mut topics = self.0.topics.lock().unwrap();
        let result = if topics.iter().any(|existing| existing.slug == topic.slug) {
            // Unique violation surfaces as a client error.
            Err(CoreError::BadRequest)
        } else {
            topics.push(topic.clone());
            Ok(topic)
        };
        async move { result }
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn fetch_page(
        &self,
        query: ArticleListQuery,
    ) -> impl Future<Output = Result<ArticlePage, CoreError>> + Send {
        self.0.article_fetches.fetch_add(1, Ordering::SeqCst);
        let articles = self.0.articles.lock().unwrap();
        let matching: Vec<&Article> = articles
            .iter()
            .filter(|article| {
                query
                    .topic
                    .as_deref()
                    .is_none_or(|topic| article.topic == topic)
            })
            .collect();
        let total_count = matching.len() as i64;
        let offset = query.pagination.offset() as usize;
        let limit = query.pagination.limit() as usize;
        let page: Vec<ArticlePreview> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|article| ArticlePreview {
                article_id: article.article_id,
                author: article.author.clone(),
                title: article.title.clone(),
                topic: article.topic.clone(),
                article_img_url: article.article_img_url.clone(),
                votes: article.votes,
                created_at: article.created_at,
                comment_count: article.comment_count,
            })
            .collect();
        async move {
            Ok(ArticlePage {
                articles: page,
                total_count,
            })
        }
    }

    fn get_by_id(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<Option<Article>, CoreError>> + Send {
        let article = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.article_id == article_id)
            .cloned();
        async move { Ok(article) }
    }

    fn insert(
        &self,
        article: NewArticle,
    ) -> impl Future<Output = Result<Article, CoreError>> + Send {
        self.0.article_inserts.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.0.articles.lock().unwrap();
        let article_id = articles
            .iter()
            .map(|existing| existing.article_id)
            .max()
            .unwrap_or(0)
            + 1;
        let created = Article {
            article_id,
            author: article.author,
            title: article.title,
            body: article.body,
            topic: article.topic,
            article_img_url: article.article_img_url,
            votes: 0,
            created_at: Utc::now(),
            comment_count: 0,
        };
        articles.push(created.clone());
        async move { Ok(created) }
    }

    fn update_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Option<Article>, CoreError>> + Send {
        let mut articles = self.0.articles.lock().unwrap();
        let updated = articles
            .iter_mut()
            .find(|article| article.article_id == article_id)
            .map(|article| {
                article.votes += inc_votes;
                article.clone()
            });
        async move { Ok(updated) }
    }

    fn delete_cascade(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send {
        let mut articles = self.0.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| article.article_id != article_id);
        let removed = articles.len() < before;
        if removed {
            self.0
                .comments
                .lock()
                .unwrap()
                .retain(|comment| comment.article_id != article_id);
        }
        async move { Ok(removed) }
    }

    fn exists(&self, article_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send {
        let exists = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .any(|article| article.article_id == article_id);
        async move { Ok(exists) }
    }
}

impl CommentRepository for InMemoryCommentRepository {
    fn fetch_by_article(
        &self,
        article_id: i32,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send {
        let comments: Vec<Comment> = self
            .0
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .cloned()
            .collect();
        async move { Ok(comments) }
    }

    fn insert(&self, comment: NewComment) -> impl Future<Output = Result<Comment, CoreError>> + Send {
        self.0.comment_inserts.fetch_add(1, Ordering::SeqCst);
        let known_user = self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|user| user.username == comment.author);
        let mut comments = self.0.comments.lock().unwrap();
        let result = if known_user {
            let comment_id = comments
                .iter()
                .map(|existing| existing.comment_id)
                .max()
                .unwrap_or(0)
                + 1;
            let created = Comment {
                comment_id,
                article_id: comment.article_id,
                author: comment.author,
                body: comment.body,
                votes: 0,
                created_at: Utc::now(),
            };
            comments.push(created.clone());
            Ok(created)
        } else {
            // Foreign-key violation surfaces as a client error.
            Err(CoreError::BadRequest)
        };
        async move { result }
    }

    fn update_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send {
        let mut comments = self.0.comments.lock().unwrap();
        let updated = comments
            .iter_mut()
            .find(|comment| comment.comment_id == comment_id)
            .map(|comment| {
                comment.votes += inc_votes;
                comment.clone()
            });
        async move { Ok(updated) }
    }

    fn delete(&self, comment_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send {
        let mut comments = self.0.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|comment| comment.comment_id != comment_id);
        let removed = comments.len() < before;
        async move { Ok(removed) }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send {
        let users = self.0.users.lock().unwrap().clone();
        async move { Ok(users) }
    }

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send {
        let user = self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned();
        async move { Ok(user) }
    }
}

pub type FixtureService = Service<
    InMemoryTopicRepository,
    InMemoryArticleRepository,
    InMemoryCommentRepository,
    InMemoryUserRepository,
>;

pub fn sample_topics() -> Vec<Topic> {
    vec![
        Topic {
            slug: "cats".to_string(),
            description: "Not dogs".to_string(),
        },
        Topic {
            slug: "dogs".to_string(),
            description: "Not cats".to_string(),
        },
    ]
}

pub fn sample_users() -> Vec<User> {
    vec![
        User {
            username: "butter_bridge".to_string(),
            name: "jonny".to_string(),
            avatar_url: "https://example.com/butter_bridge.jpg".to_string(),
        },
        User {
            username: "icellusedkars".to_string(),
            name: "sam".to_string(),
            avatar_url: "https://example.com/icellusedkars.jpg".to_string(),
        },
    ]
}

/// Thirteen articles on the `cats` topic; article 1 starts with zero votes.
pub fn sample_articles() -> Vec<Article> {
    (1..=13)
        .map(|article_id| Article {
            article_id,
            author: "butter_bridge".to_string(),
            title: format!("Article {article_id}"),
            body: "Some words.".to_string(),
            topic: "cats".to_string(),
            article_img_url: "https://example.com/cat.jpg".to_string(),
            votes: 0,
            created_at: Utc::now() - Duration::hours(article_id as i64),
            comment_count: 0,
        })
        .collect()
}

pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            comment_id: 1,
            article_id: 1,
            author: "icellusedkars".to_string(),
            body: "First!".to_string(),
            votes: 0,
            created_at: Utc::now(),
        },
        Comment {
            comment_id: 2,
            article_id: 1,
            author: "butter_bridge".to_string(),
            body: "Second.".to_string(),
            votes: 4,
            created_at: Utc::now() - Duration::minutes(5),
        },
    ]
}

fn service_from_db(db: InMemoryDb) -> FixtureService {
    let db = Arc::new(db);
    Service::new(
        InMemoryTopicRepository(db.clone()),
        InMemoryArticleRepository(db.clone()),
        InMemoryCommentRepository(db.clone()),
        InMemoryUserRepository(db),
    )
}

pub fn service_with_topics(topics: Vec<Topic>) -> FixtureService {
    service_from_db(InMemoryDb {
        topics: Mutex::new(topics),
        ..Default::default()
    })
}

/// Seeded service: two topics, two users, thirteen articles, two comments.
pub fn sample_service() -> FixtureService {
    service_from_db(InMemoryDb {
        topics: Mutex::new(sample_topics()),
        articles: Mutex::new(sample_articles()),
        comments: Mutex::new(sample_comments()),
        users: Mutex::new(sample_users()),
        ..Default::default()
    })
}
