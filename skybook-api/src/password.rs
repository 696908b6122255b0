use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use skybook_core::DomainError;

/// Argon2id credential hashing. Length policy lives in the validation
/// layer; this service only hashes and verifies.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                DomainError::Store(skybook_core::StoreError::Backend(
                    format!("failed to hash password: {}", e).into(),
                ))
            })?;
        Ok(hash.to_string())
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            DomainError::Store(skybook_core::StoreError::Backend(
                format!("invalid password hash: {}", e).into(),
            ))
        })?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Store(skybook_core::StoreError::Backend(
                format!("password verification error: {}", e).into(),
            ))),
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new();
        let hash = service.hash_password("secret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(service.verify_password("secret", &hash).unwrap());
        assert!(!service.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_salts_are_random() {
        let service = PasswordService::new();
        let a = service.hash_password("secret").unwrap();
        let b = service.hash_password("secret").unwrap();
        assert_ne!(a, b);
    }
}
