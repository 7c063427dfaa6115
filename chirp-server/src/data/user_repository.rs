use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) name: String,
    pub(crate) nick: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct UserPatch {
    pub(crate) name: String,
    pub(crate) nick: String,
    pub(crate) email: String,
}

/// Just enough to authenticate: the id and the stored hash. Login never
/// needs the full profile.
#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user_id: i64,
    pub(crate) password_hash: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError>;
    /// Case-insensitive substring match over name and nick.
    async fn search_by_name_or_nick(&self, term: &str) -> Result<Vec<User>, DomainError>;
    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError>;
    async fn delete_user(&self, id: i64) -> Result<bool, DomainError>;
    /// Idempotent: inserting an existing edge is a no-op.
    async fn follow(&self, user_id: i64, follower_id: i64) -> Result<(), DomainError>;
    /// Removing a missing edge is a no-op.
    async fn unfollow(&self, user_id: i64, follower_id: i64) -> Result<(), DomainError>;
    async fn list_followers(&self, user_id: i64) -> Result<Vec<User>, DomainError>;
    async fn list_following(&self, user_id: i64) -> Result<Vec<User>, DomainError>;
    async fn find_password_hash(&self, user_id: i64) -> Result<Option<String>, DomainError>;
    async fn update_password(
        &self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<(), DomainError>;
}
