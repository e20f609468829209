// src/models/mod.rs

use serde::{Deserialize, Deserializer, de};

pub mod progress;
pub mod quiz;
pub mod result;
pub mod score;

/// Reads a user id sent either as a JSON number or as a numeric string
/// (`5` or `"5"`). Absent and `null` both give `None`.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("user_id {:?} is not an integer", raw))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{progress::SaveProgressRequest, result::SubmitAnswerRequest};

    #[test]
    fn test_user_id_accepts_number_or_numeric_string() {
        let from_number: SubmitAnswerRequest =
            serde_json::from_value(json!({ "user_id": 5, "question_id": 1, "selected_option": 0 }))
                .unwrap();
        let from_text: SubmitAnswerRequest =
            serde_json::from_value(json!({ "user_id": "5", "question_id": 1, "selected_option": 0 }))
                .unwrap();

        assert_eq!(from_number.user_id, Some(5));
        assert_eq!(from_text.user_id, Some(5));
        assert_eq!(from_text.selected_option, Some(0));
    }

    #[test]
    fn test_user_id_absent_or_null_is_none() {
        let absent: SaveProgressRequest =
            serde_json::from_value(json!({ "question_id": 1, "selected_option": 0 })).unwrap();
        let null: SaveProgressRequest =
            serde_json::from_value(json!({ "user_id": null, "question_id": 1 })).unwrap();

        assert_eq!(absent.user_id, None);
        assert_eq!(null.user_id, None);
    }

    #[test]
    fn test_user_id_rejects_non_numeric_text() {
        let result = serde_json::from_value::<SaveProgressRequest>(json!({ "user_id": "abc" }));
        assert!(result.is_err());
    }
}
