use serde_json::{Value, json};

use super::{BindMode, Coerced, FieldErrors, NOT_BLANK, NOT_VALID, Submission, coerce_i32};
use crate::models::transport::Transport;

pub const NUMBER: &str = "number";
pub const TYPE: &str = "type";

/// Transport fields after binding, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportDraft {
    number: Option<Value>,
    transport_type: Option<Value>,
    extra: Vec<String>,
}

/// A transport write that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportInput {
    pub number: i32,
    pub type_id: i32,
}

impl TransportDraft {
    /// Binds a submission onto `current` (or onto nothing, for a create).
    #[must_use]
    pub fn bind(mut submission: Submission, current: Option<&Transport>, mode: BindMode) -> Self {
        let number = submission.bind(NUMBER, current.map(|t| json!(t.number)), mode);
        let transport_type = submission.bind(TYPE, current.map(|t| json!(t.type_id())), mode);

        Self {
            number,
            transport_type,
            extra: submission.into_extra_fields(),
        }
    }

    /// The type id this draft refers to, when it reads as one.
    #[must_use]
    pub fn type_id(&self) -> Option<i32> {
        match coerce_i32(self.transport_type.as_ref()) {
            Coerced::Value(id) => Some(id),
            Coerced::Blank | Coerced::Invalid => None,
        }
    }

    /// `type_exists` reports whether [`Self::type_id`] names a stored type.
    pub fn validate(&self, type_exists: bool) -> Result<TransportInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.add_extra_fields(&self.extra);

        let number = match coerce_i32(self.number.as_ref()) {
            Coerced::Value(n) => Some(n),
            Coerced::Blank => {
                errors.add(NUMBER, NOT_BLANK);
                None
            }
            Coerced::Invalid => {
                errors.add(NUMBER, NOT_VALID);
                None
            }
        };

        let type_id = match coerce_i32(self.transport_type.as_ref()) {
            Coerced::Value(id) if type_exists => Some(id),
            Coerced::Blank => {
                errors.add(TYPE, NOT_BLANK);
                None
            }
            Coerced::Value(_) | Coerced::Invalid => {
                errors.add(TYPE, NOT_VALID);
                None
            }
        };

        match (number, type_id) {
            (Some(number), Some(type_id)) if errors.is_empty() => {
                Ok(TransportInput { number, type_id })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode;
    use crate::models::transport::TransportType;

    fn existing() -> Transport {
        Transport {
            id: 3,
            number: 1001,
            transport_type: TransportType {
                id: 2,
                name: "Tram".to_string(),
            },
        }
    }

    fn draft(body: &str, current: Option<&Transport>, mode: BindMode) -> TransportDraft {
        TransportDraft::bind(decode(body.as_bytes()).unwrap(), current, mode)
    }

    #[test]
    fn test_create_with_all_fields() {
        let draft = draft(r#"{"number": 1001, "type": 2}"#, None, BindMode::Replace);
        assert_eq!(draft.type_id(), Some(2));
        assert_eq!(
            draft.validate(true),
            Ok(TransportInput {
                number: 1001,
                type_id: 2
            })
        );
    }

    #[test]
    fn test_null_number_is_blank() {
        let errors = draft(r#"{"number": null, "type": 2}"#, None, BindMode::Replace)
            .validate(true)
            .unwrap_err();
        assert_eq!(errors.get(NUMBER), Some(&[NOT_BLANK.to_string()][..]));
        assert!(errors.get(TYPE).is_none());
    }

    #[test]
    fn test_non_numeric_number_is_invalid() {
        let errors = draft(r#"{"number": "fail"}"#, Some(&existing()), BindMode::Merge)
            .validate(true)
            .unwrap_err();
        assert_eq!(errors.get(NUMBER), Some(&[NOT_VALID.to_string()][..]));
    }

    #[test]
    fn test_unknown_type_is_invalid() {
        let draft = draft(r#"{"number": 5, "type": 999}"#, None, BindMode::Replace);
        let errors = draft.validate(false).unwrap_err();
        assert_eq!(errors.get(TYPE), Some(&[NOT_VALID.to_string()][..]));
    }

    #[test]
    fn test_patch_keeps_missing_fields() {
        let draft = draft(r#"{"number": 1002}"#, Some(&existing()), BindMode::Merge);
        assert_eq!(
            draft.validate(true),
            Ok(TransportInput {
                number: 1002,
                type_id: 2
            })
        );
    }

    #[test]
    fn test_put_clears_missing_fields() {
        let draft = draft(r#"{"number": 1222}"#, Some(&existing()), BindMode::Replace);
        assert_eq!(draft.type_id(), None);
        let errors = draft.validate(false).unwrap_err();
        assert_eq!(errors.get(TYPE), Some(&[NOT_BLANK.to_string()][..]));
        assert!(errors.get(NUMBER).is_none());
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let draft = draft("", Some(&existing()), BindMode::Merge);
        assert_eq!(
            draft.validate(true),
            Ok(TransportInput {
                number: 1001,
                type_id: 2
            })
        );
    }

    #[test]
    fn test_extra_fields_are_rejected() {
        let errors = draft(r#"{"number": 1, "type": 2, "color": "red"}"#, None, BindMode::Replace)
            .validate(true)
            .unwrap_err();
        assert!(errors.get(crate::forms::FORM_KEY).is_some());
    }
}
