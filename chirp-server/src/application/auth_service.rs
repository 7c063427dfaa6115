use std::sync::Arc;

use crate::application::password;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::LoginRequest;
use crate::infrastructure::jwt::JwtService;

pub(crate) struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub(crate) fn new(users: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Unknown email and wrong password both surface as `InvalidCredentials`
    /// so the response does not reveal whether an email is registered.
    pub(crate) async fn login(&self, req: LoginRequest) -> Result<String, DomainError> {
        let req = req.validate()?;

        let creds = match self.users.find_credentials_by_email(&req.email).await? {
            Some(creds) => creds,
            None => {
                // burn the same verification time as the found-user path
                match password::verify_password(&req.password, Self::DUMMY_PASSWORD_HASH) {
                    Ok(()) | Err(DomainError::InvalidCredentials) => {}
                    Err(err) => return Err(err),
                }
                return Err(DomainError::InvalidCredentials);
            }
        };

        password::verify_password(&req.password, &creds.password_hash)?;

        self.jwt
            .issue_token(creds.user_id)
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }
}
