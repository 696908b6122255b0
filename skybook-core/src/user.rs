use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account lifecycle flag. Accounts are never hard-deleted; an inactive
/// account is refused at log-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A registered account, stored in the `users` collection.
///
/// `email` and `username` carry unique indexes; `password` holds the
/// Argon2id PHC hash, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub fullname: String,
    pub password: String,
    pub is_admin: bool,
    pub status: UserStatus,
}

impl User {
    pub fn new(
        email: String,
        username: String,
        fullname: String,
        password_hash: String,
        is_admin: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            fullname,
            password: password_hash,
            is_admin,
            status: UserStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Profile fields replaced wholesale by `update-user`. The flight and
/// booking records are untouched by profile changes.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub email: String,
    pub username: String,
    pub fullname: String,
    pub password_hash: String,
    pub is_admin: bool,
}
