pub mod article;
pub mod comment;
pub mod common;
pub mod topic;
pub mod user;
