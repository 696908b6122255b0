use uuid::Uuid;

use crate::error::DomainError;

/// Authenticated caller, attached to the request by the auth middleware
/// after token verification and user lookup.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// Gate for admin-only operations.
pub fn require_admin(caller: &Identity) -> Result<(), DomainError> {
    if caller.is_admin {
        Ok(())
    } else {
        Err(DomainError::Forbidden(
            "Access denied. Admin privileges required.".to_string(),
        ))
    }
}

/// Gate for operations reserved to regular (non-admin) users.
pub fn require_regular_user(caller: &Identity) -> Result<(), DomainError> {
    if caller.is_admin {
        Err(DomainError::Forbidden(
            "Access denied. Regular user privileges required.".to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            is_admin: true,
        }
    }

    fn regular() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            is_admin: false,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&admin()).is_ok());
        assert!(matches!(
            require_admin(&regular()),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_regular_user() {
        assert!(require_regular_user(&regular()).is_ok());
        assert!(matches!(
            require_regular_user(&admin()),
            Err(DomainError::Forbidden(_))
        ));
    }
}
