use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn get_user_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
