pub mod article;
pub mod comment;
pub mod db;
pub mod topic;
pub mod user;
