use std::sync::Arc;

use crate::application::password;
use crate::data::user_repository::{NewUser, UserPatch, UserRepository};
use crate::domain::ensure_owner;
use crate::domain::error::DomainError;
use crate::domain::user::{ChangePasswordRequest, RegisterRequest, UpdateUserRequest, User};

pub(crate) struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub(crate) fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<User, DomainError> {
        let req = req.validate()?;
        let password_hash = password::hash_password(&req.password)?;

        self.users
            .create_user(NewUser {
                name: req.name,
                nick: req.nick,
                email: req.email,
                password_hash,
            })
            .await
    }

    pub(crate) async fn get_user(&self, user_id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user id: {user_id}")))
    }

    pub(crate) async fn search_users(&self, term: &str) -> Result<Vec<User>, DomainError> {
        self.users.search_by_name_or_nick(term.trim()).await
    }

    pub(crate) async fn update_user(
        &self,
        actor_id: i64,
        user_id: i64,
        req: UpdateUserRequest,
    ) -> Result<(), DomainError> {
        ensure_owner(actor_id, user_id, "you cannot update a user that is not yours")?;
        let req = req.validate()?;

        let updated = self
            .users
            .update_user(
                user_id,
                UserPatch {
                    name: req.name,
                    nick: req.nick,
                    email: req.email,
                },
            )
            .await?;
        if !updated {
            return Err(DomainError::NotFound(format!("user id: {user_id}")));
        }
        Ok(())
    }

    pub(crate) async fn delete_user(&self, actor_id: i64, user_id: i64) -> Result<(), DomainError> {
        ensure_owner(actor_id, user_id, "you cannot delete a user that is not yours")?;

        let deleted = self.users.delete_user(user_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("user id: {user_id}")));
        }
        Ok(())
    }

    pub(crate) async fn follow_user(&self, actor_id: i64, target_id: i64) -> Result<(), DomainError> {
        if actor_id == target_id {
            return Err(DomainError::Forbidden("you cannot follow yourself"));
        }
        self.users.follow(target_id, actor_id).await
    }

    pub(crate) async fn unfollow_user(
        &self,
        actor_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError> {
        if actor_id == target_id {
            return Err(DomainError::Forbidden("you cannot unfollow yourself"));
        }
        self.users.unfollow(target_id, actor_id).await
    }

    pub(crate) async fn followers(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        self.users.list_followers(user_id).await
    }

    pub(crate) async fn following(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        self.users.list_following(user_id).await
    }

    /// Re-verifies the caller's current password before accepting a new one.
    pub(crate) async fn change_password(
        &self,
        actor_id: i64,
        user_id: i64,
        req: ChangePasswordRequest,
    ) -> Result<(), DomainError> {
        ensure_owner(
            actor_id,
            user_id,
            "you cannot change the password of a user that is not yours",
        )?;
        let req = req.validate()?;

        let stored_hash = self
            .users
            .find_password_hash(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user id: {user_id}")))?;

        password::verify_password(&req.current, &stored_hash).map_err(|err| match err {
            DomainError::InvalidCredentials => DomainError::CurrentPasswordMismatch,
            other => other,
        })?;

        let new_hash = password::hash_password(&req.new)?;
        self.users.update_password(user_id, &new_hash).await
    }
}
