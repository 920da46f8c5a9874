use crate::domain::{
    common::entities::app_errors::CoreError,
    topic::{entities::Topic, value_objects::CreateTopicInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait TopicService: Send + Sync {
    fn get_topics(&self) -> impl Future<Output = Result<Vec<Topic>, CoreError>> + Send;

    fn create_topic(
        &self,
        input: CreateTopicInput,
    ) -> impl Future<Output = Result<Topic, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TopicRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Topic>, CoreError>> + Send;

    fn get_by_slug(
        &self,
        slug: String,
    ) -> impl Future<Output = Result<Option<Topic>, CoreError>> + Send;

    fn insert(&self, topic: Topic) -> impl Future<Output = Result<Topic, CoreError>> + Send;
}
