use serde::Deserialize;

use crate::error::DomainError;

/// Raw account payload as received from the client. All fields optional so
/// that the validator, not deserialization, reports what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub is_admin: Option<bool>,
}

/// Normalized registration data: email lower-cased, every field present.
#[derive(Debug, Clone)]
pub struct ValidUser {
    pub email: String,
    pub password: String,
    pub username: String,
    pub fullname: String,
    pub is_admin: bool,
}

// Minimum length 2 mirrors the original schema. It is far too weak for a
// real deployment and is kept only for behavioral fidelity.
const MIN_PASSWORD_LEN: usize = 2;

fn is_valid_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.chars().any(char::is_whitespace)
}

/// Full schema check used at sign-up and profile update. Reports every
/// violated field in one error.
pub fn validate_registration(payload: &UserPayload) -> Result<ValidUser, DomainError> {
    let mut violations = Vec::new();

    let email = match payload.email.as_deref() {
        Some(e) if is_valid_email(e) => Some(e.to_lowercase()),
        Some(_) | None => {
            violations.push("email");
            None
        }
    };
    let password = match payload.password.as_deref() {
        Some(p) if p.len() >= MIN_PASSWORD_LEN => Some(p.to_string()),
        Some(_) | None => {
            violations.push("password");
            None
        }
    };
    let username = match payload.username.as_deref() {
        Some(u) if !u.trim().is_empty() => Some(u.to_string()),
        Some(_) | None => {
            violations.push("username");
            None
        }
    };
    let fullname = match payload.fullname.as_deref() {
        Some(f) if !f.trim().is_empty() => Some(f.to_string()),
        Some(_) | None => {
            violations.push("fullname");
            None
        }
    };

    if !violations.is_empty() {
        return Err(DomainError::Validation(format!(
            "invalid fields: {}",
            violations.join(", ")
        )));
    }

    Ok(ValidUser {
        email: email.unwrap(),
        password: password.unwrap(),
        username: username.unwrap(),
        fullname: fullname.unwrap(),
        is_admin: payload.is_admin.unwrap_or(false),
    })
}

/// Log-in only needs a well-formed email and a password.
pub fn validate_credentials(payload: &UserPayload) -> Result<(String, String), DomainError> {
    let email = payload
        .email
        .as_deref()
        .filter(|e| is_valid_email(e))
        .map(str::to_lowercase);
    let password = payload
        .password
        .as_deref()
        .filter(|p| p.len() >= MIN_PASSWORD_LEN)
        .map(str::to_string);

    match (email, password) {
        (Some(e), Some(p)) => Ok((e, p)),
        _ => Err(DomainError::BadRequest(
            "Invalid Username/Password".to_string(),
        )),
    }
}
