use serde::{Deserialize, Serialize};

/// Registered backer. The password is kept only because the document carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_document_shape() {
        let user: User =
            serde_json::from_str(r#"{"user_id": "user-1", "username": "alice"}"#).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.username, "alice");
        assert!(user.password.is_empty());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["user_id"], "user-1");
    }
}
