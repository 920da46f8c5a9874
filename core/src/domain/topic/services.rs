use crate::domain::{
    article::ports::ArticleRepository,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    topic::{
        entities::Topic,
        ports::{TopicRepository, TopicService},
        value_objects::CreateTopicInput,
    },
    user::ports::UserRepository,
};

impl<T, A, C, U> TopicService for Service<T, A, C, U>
where
    T: TopicRepository,
    A: ArticleRepository,
    C: CommentRepository,
    U: UserRepository,
{
    async fn get_topics(&self) -> Result<Vec<Topic>, CoreError> {
        self.topic_repository.fetch_all().await
    }

    async fn create_topic(&self, input: CreateTopicInput) -> Result<Topic, CoreError> {
        let slug = input.slug.filter(|slug| !slug.is_empty());
        let description = input.description.filter(|description| !description.is_empty());

        // Required fields are checked before the storage layer is touched.
        let (Some(slug), Some(description)) = (slug, description) else {
            return Err(CoreError::MissingFields(
                "Slug and description required".to_string(),
            ));
        };

        self.topic_repository
            .insert(Topic { slug, description })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::common::fixtures::{sample_topics, service_with_topics};
    use crate::domain::topic::ports::TopicService;
    use crate::domain::topic::value_objects::CreateTopicInput;

    #[tokio::test]
    async fn lists_every_topic() {
        let service = service_with_topics(sample_topics());
        let topics = service.get_topics().await.unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].slug, "cats");
    }

    #[tokio::test]
    async fn creates_a_topic_with_both_fields() {
        let service = service_with_topics(sample_topics());
        let topic = service
            .create_topic(CreateTopicInput {
                slug: Some("coding".to_string()),
                description: Some("All things code".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(topic.slug, "coding");
    }

    #[tokio::test]
    async fn rejects_a_missing_description_before_storage() {
        let service = service_with_topics(sample_topics());
        let err = service
            .create_topic(CreateTopicInput {
                slug: Some("coding".to_string()),
                description: None,
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingFields("Slug and description required".to_string())
        );
        assert_eq!(service.topic_repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_client_error() {
        let service = service_with_topics(sample_topics());
        let err = service
            .create_topic(CreateTopicInput {
                slug: Some("cats".to_string()),
                description: Some("again".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::BadRequest);
    }
}
