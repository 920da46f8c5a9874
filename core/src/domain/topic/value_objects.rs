#[derive(Debug, Clone, Default)]
pub struct CreateTopicInput {
    pub slug: Option<String>,
    pub description: Option<String>,
}
