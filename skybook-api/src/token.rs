use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skybook_core::DomainError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id the token is bound to.
    pub sub: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_seconds: u64,
    pub refresh_ttl_seconds: u64,
}

/// Issues and verifies the access/refresh token pair (HS256). Access and
/// refresh tokens use separate secrets so one can never stand in for the
/// other.
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        self.issue(user_id, &self.config.access_secret, self.config.access_ttl_seconds)
    }

    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        self.issue(user_id, &self.config.refresh_secret, self.config.refresh_ttl_seconds)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, DomainError> {
        self.verify(token, &self.config.access_secret)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Uuid, DomainError> {
        self.verify(token, &self.config.refresh_secret)
    }

    fn issue(&self, user_id: Uuid, secret: &str, ttl_seconds: u64) -> Result<String, DomainError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::seconds(ttl_seconds as i64)).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| DomainError::Unauthorized(format!("Token encoding failed: {}", e)))
    }

    fn verify(&self, token: &str, secret: &str) -> Result<Uuid, DomainError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| DomainError::Unauthorized("Unauthorized".to_string()))?;

        data.claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| DomainError::Unauthorized("Unauthorized".to_string()))
    }
}
