//! User Entity Implementation
//!
//! 저널 서비스 사용자 엔티티입니다. 등록 이후에는 변경되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password` 필드에는 bcrypt 해시만 저장되며 평문은 어디에도 남지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_user_document_field_names() {
        let user = User::new("alice".to_string(), "$2b$04$hash".to_string());
        let document = bson::to_document(&user).unwrap();

        assert!(document.contains_key("username"));
        assert!(document.contains_key("password"));
        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("password_hash"));
    }
}
