//! Entry Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_null_as_empty;

/// 일기 엔티티
///
/// 키는 `(user_id, date)` 이고 `date` 는 항상 정규화된 `YYYY-MM-DD` 문자열입니다.
/// 같은 날짜에 다시 저장하면 `content` 와 `updated_at` 만 바뀝니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub date: String,
    /// 기존 문서의 `null` 과 누락은 빈 문자열로 읽습니다.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub content: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Entry {
    pub fn new(user_id: String, date: String, content: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            date,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    #[test]
    fn test_entry_document_field_names() {
        let entry = Entry::new("u1".to_string(), "2024-03-15".to_string(), "hello".to_string());
        let document = bson::to_document(&entry).unwrap();

        assert_eq!(document.get_str("userId").unwrap(), "u1");
        assert_eq!(document.get_str("date").unwrap(), "2024-03-15");
        assert!(document.contains_key("createdAt"));
        assert!(document.contains_key("updatedAt"));
    }

    #[test]
    fn test_missing_content_reads_as_empty() {
        let now = DateTime::now();
        let document = doc! {
            "userId": "u1",
            "date": "2024-03-15",
            "createdAt": now,
            "updatedAt": now,
        };

        let entry: Entry = bson::from_document(document).unwrap();
        assert_eq!(entry.content, "");
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let now = DateTime::now();
        let document = doc! {
            "userId": "u1",
            "date": "2024-03-15",
            "content": Bson::Null,
            "createdAt": now,
            "updatedAt": now,
        };

        let entry: Entry = bson::from_document(document).unwrap();
        assert_eq!(entry.content, "");

        let written = bson::to_document(&entry).unwrap();
        assert_eq!(written.get_str("content").unwrap(), "");
    }
}
