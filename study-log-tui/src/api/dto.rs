use serde::{Deserialize, Serialize};

use crate::types::StudyLogInput;

#[derive(Serialize)]
pub struct StudyLogBody<'a> {
    pub title: &'a str,
    pub hours: i32,
}

impl<'a> From<&'a StudyLogInput> for StudyLogBody<'a> {
    fn from(input: &'a StudyLogInput) -> Self {
        Self {
            title: &input.title,
            hours: input.hours,
        }
    }
}

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct PostgrestErrorDto {
    pub message: Option<String>,
    pub details: Option<String>,
    pub code: Option<String>,
}

impl PostgrestErrorDto {
    pub fn describe(&self) -> Option<String> {
        let message = self.message.as_deref()?;
        Some(match (&self.code, &self.details) {
            (Some(code), Some(details)) => format!("{message} ({code}: {details})"),
            (Some(code), None) => format!("{message} ({code})"),
            (None, Some(details)) => format!("{message} ({details})"),
            (None, None) => message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_serializes_only_mutable_columns() {
        let input = StudyLogInput::new("Math", 3);
        let json = serde_json::to_value(StudyLogBody::from(&input)).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Math", "hours": 3 }));
    }

    #[test]
    fn error_description_includes_code_when_present() {
        let dto: PostgrestErrorDto = serde_json::from_str(
            r#"{"code":"23502","details":null,"hint":null,"message":"null value in column \"title\""}"#,
        )
        .unwrap();
        assert_eq!(
            dto.describe().as_deref(),
            Some("null value in column \"title\" (23502)")
        );
    }

    #[test]
    fn error_description_missing_message_is_none() {
        let dto: PostgrestErrorDto = serde_json::from_str(r#"{"code":"42501"}"#).unwrap();
        assert!(dto.describe().is_none());
    }
}
