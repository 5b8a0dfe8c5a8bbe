//! Account and role models.
//!
//! An [`Account`] is the login identity behind a student or teacher (or a
//! standalone staff login). It is intentionally not serializable: responses
//! go through [`AccountResponse`], which never carries the password hash.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Closed set of roles recognized by the API.
///
/// The wire names are the legacy Portuguese role names and are matched
/// case-sensitively when read back from a token's `scope` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "pedagogico")]
    Pedagogical,
    #[serde(rename = "recruiter")]
    Recruiter,
    #[serde(rename = "professor")]
    Teacher,
    #[serde(rename = "aluno")]
    Student,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Pedagogical,
        Role::Recruiter,
        Role::Teacher,
        Role::Student,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pedagogical => "pedagogico",
            Role::Recruiter => "recruiter",
            Role::Teacher => "professor",
            Role::Student => "aluno",
        }
    }

    /// Exact-match lookup, used for token scopes.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Case-insensitive lookup, used when resolving a requested role name
    /// on account registration (clients submit these with mixed casing).
    pub fn resolve(name: &str) -> Option<Role> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored account. `password` holds the bcrypt hash, never the raw secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub login: String,
    pub password: String,
    pub role: Role,
}

/// An account about to be inserted; `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login: String,
    pub password: String,
    pub role: Role,
}

/// Public projection of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub login: String,
    pub role: Role,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            login: account.login.clone(),
            role: account.role,
        }
    }
}

/// DTO for registering a new account.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountDto {
    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
    /// Role name, resolved case-insensitively against the fixed role set.
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Role::from_name("Aluno"), None);
        assert_eq!(Role::from_name("aluno"), Some(Role::Student));
    }

    #[test]
    fn resolve_ignores_case() {
        assert_eq!(Role::resolve("Aluno"), Some(Role::Student));
        assert_eq!(Role::resolve("PROFESSOR"), Some(Role::Teacher));
        assert_eq!(Role::resolve("director"), None);
    }
}
