pub mod article;
pub mod comment;
pub mod extractors;
pub mod server;
pub mod topic;
pub mod user;
