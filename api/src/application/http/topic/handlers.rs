pub mod create_topic;
pub mod get_topics;
