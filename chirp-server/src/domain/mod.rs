pub(crate) mod error;
pub(crate) mod post;
pub(crate) mod user;

use error::DomainError;

/// Single ownership predicate shared by every mutating flow.
pub(crate) fn ensure_owner(
    actor_id: i64,
    owner_id: i64,
    message: &'static str,
) -> Result<(), DomainError> {
    if actor_id != owner_id {
        return Err(DomainError::Forbidden(message));
    }
    Ok(())
}
