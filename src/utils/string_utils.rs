//! # 문자열 유틸리티

use serde::{Deserialize, Deserializer};

use crate::errors::{AppError, AppResult};

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `ValidationError` 를 반환하고,
/// 그렇지 않으면 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  alice  ", "Username").unwrap(), "alice");
/// assert!(validate_required_string("   ", "Username").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// `null` 또는 누락된 문자열 필드를 빈 문자열로 역직렬화
///
/// 기존 저장 데이터에는 `content: null` 인 문서가 있을 수 있습니다.
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "deserialize_null_as_empty")]
/// pub content: String,
/// ```
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string_trims() {
        assert_eq!(validate_required_string("  alice  ", "Username").unwrap(), "alice");
        assert_eq!(validate_required_string("bob", "Username").unwrap(), "bob");
    }

    #[test]
    fn test_validate_required_string_rejects_blank() {
        for value in ["", "   ", "\t\n"] {
            match validate_required_string(value, "Username") {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Username is required"),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }

    #[derive(Debug, serde::Deserialize)]
    struct Note {
        #[serde(default, deserialize_with = "deserialize_null_as_empty")]
        body: String,
    }

    #[test]
    fn test_null_and_missing_strings_read_as_empty() {
        let note: Note = serde_json::from_str(r#"{"body": null}"#).unwrap();
        assert_eq!(note.body, "");

        let note: Note = serde_json::from_str("{}").unwrap();
        assert_eq!(note.body, "");

        let note: Note = serde_json::from_str(r#"{"body": "hi"}"#).unwrap();
        assert_eq!(note.body, "hi");
    }
}
