//! Shop users.

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::UserId;

/// A user account as returned by `GET /users`.
///
/// The password is accepted when the API echoes it back but is never
/// serialized again, so it cannot leak into rendered rows.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Entity for User {
    type Id = UserId;
    const RESOURCE: &'static str = "users";

    fn id(&self) -> UserId {
        self.id
    }
}

/// Payload for `POST /users`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_reserialized() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"username":"alice","email":"alice@shop.test","password":"hunter22"}"#,
        )
        .unwrap();
        assert_eq!(user.password.as_deref(), Some("hunter22"));

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "alice");
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = NewUser {
            username: "alice".to_string(),
            email: "alice@shop.test".to_string(),
            password: "hunter22".to_string(),
        };
        let debug = format!("{user:?}");
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("[REDACTED]"));
    }
}
