use serde_json::{Value, json};

use super::{BindMode, Coerced, FieldErrors, NOT_BLANK, NOT_VALID, Submission, coerce_text};
use crate::models::transport::TransportType;

pub const NAME: &str = "name";

pub const NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct TransportTypeDraft {
    name: Option<Value>,
    extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportTypeInput {
    pub name: String,
}

impl TransportTypeDraft {
    #[must_use]
    pub fn bind(
        mut submission: Submission,
        current: Option<&TransportType>,
        mode: BindMode,
    ) -> Self {
        let name = submission.bind(NAME, current.map(|t| json!(t.name)), mode);

        Self {
            name,
            extra: submission.into_extra_fields(),
        }
    }

    pub fn validate(&self) -> Result<TransportTypeInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.add_extra_fields(&self.extra);

        let name = match coerce_text(self.name.as_ref()) {
            Coerced::Value(name) if name.chars().count() > NAME_MAX_LEN => {
                errors.add(
                    NAME,
                    format!(
                        "This value is too long. It should have {NAME_MAX_LEN} characters or less."
                    ),
                );
                None
            }
            Coerced::Value(name) => Some(name),
            Coerced::Blank => {
                errors.add(NAME, NOT_BLANK);
                None
            }
            Coerced::Invalid => {
                errors.add(NAME, NOT_VALID);
                None
            }
        };

        match name {
            Some(name) if errors.is_empty() => Ok(TransportTypeInput { name }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode;

    fn bus() -> TransportType {
        TransportType {
            id: 1,
            name: "Bus".to_string(),
        }
    }

    #[test]
    fn test_name_is_trimmed() {
        let draft = TransportTypeDraft::bind(
            decode(br#"{"name": "  Tram  "}"#).unwrap(),
            None,
            BindMode::Replace,
        );
        assert_eq!(draft.validate().unwrap().name, "Tram");
    }

    #[test]
    fn test_blank_and_invalid_names() {
        for body in [r#"{"name": ""}"#, r#"{"name": "   "}"#, "{}"] {
            let draft =
                TransportTypeDraft::bind(decode(body.as_bytes()).unwrap(), None, BindMode::Replace);
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.get(NAME), Some(&[NOT_BLANK.to_string()][..]), "{body}");
        }

        let draft = TransportTypeDraft::bind(
            decode(br#"{"name": ["Bus"]}"#).unwrap(),
            None,
            BindMode::Replace,
        );
        assert_eq!(
            draft.validate().unwrap_err().get(NAME),
            Some(&[NOT_VALID.to_string()][..])
        );
    }

    #[test]
    fn test_name_too_long() {
        let body = serde_json::json!({ "name": "x".repeat(NAME_MAX_LEN + 1) }).to_string();
        let draft = TransportTypeDraft::bind(decode(body.as_bytes()).unwrap(), None, BindMode::Replace);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_patch_and_put_against_existing() {
        let current = bus();

        let patched = TransportTypeDraft::bind(decode(b"{}").unwrap(), Some(&current), BindMode::Merge);
        assert_eq!(patched.validate().unwrap().name, "Bus");

        let replaced =
            TransportTypeDraft::bind(decode(b"{}").unwrap(), Some(&current), BindMode::Replace);
        assert!(replaced.validate().is_err());
    }
}
