use serde::{Deserialize, Serialize};

use crate::users::repo_types::{NewUser, User};

/// Request body for `POST /insert`. Absent or null fields count as empty;
/// a `user_id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Returns `None` when any required field is empty.
    pub fn into_new_user(self) -> Option<NewUser> {
        let username = self.username.filter(|v| !v.is_empty())?;
        let password = self.password.filter(|v| !v.is_empty())?;
        let email = self.email.filter(|v| !v.is_empty())?;
        Some(NewUser {
            username,
            password,
            email,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: u64,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            username: u.username,
            password: u.password,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CreateUserRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn complete_request_becomes_new_user() {
        let new_user = parse(r#"{"username":"alice","password":"pw","email":"a@example.com"}"#)
            .into_new_user()
            .unwrap();
        assert_eq!(new_user.username, "alice");
        assert_eq!(new_user.password, "pw");
        assert_eq!(new_user.email, "a@example.com");
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let req = parse(r#"{"user_id":99,"username":"a","password":"b","email":"c"}"#);
        assert!(req.into_new_user().is_some());
    }

    #[test]
    fn empty_absent_or_null_fields_are_rejected() {
        for body in [
            r#"{"username":"","password":"pw","email":"e"}"#,
            r#"{"username":"u","password":"","email":"e"}"#,
            r#"{"username":"u","password":"pw","email":""}"#,
            r#"{"username":"u","password":"pw"}"#,
            r#"{"username":null,"password":"pw","email":"e"}"#,
            r#"{}"#,
        ] {
            assert!(parse(body).into_new_user().is_none(), "accepted {body}");
        }
    }

    #[test]
    fn non_string_field_fails_to_decode() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"username":5}"#).is_err());
    }

    #[test]
    fn response_uses_user_id_key() {
        let response = UserResponse::from(User {
            user_id: 7,
            username: "alice".into(),
            password: "pw".into(),
            email: "a@example.com".into(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": 7,
                "username": "alice",
                "password": "pw",
                "email": "a@example.com"
            })
        );
    }
}
