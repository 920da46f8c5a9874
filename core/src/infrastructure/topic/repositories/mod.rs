pub mod topic_repository;
