pub mod get_user;
pub mod get_users;
