use serde_json::Value;

use super::{Coerced, FieldErrors, NOT_BLANK, Submission, coerce_i32};

pub const TRANSPORT: &str = "transport";

/// Body of a favorite-add request: `{"transport": <id>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteDraft {
    transport: Option<Value>,
}

/// What the submitted transport reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportRef {
    Id(i32),
    /// Present but not readable as an id; resolves to nothing.
    Unresolvable,
}

impl FavoriteDraft {
    #[must_use]
    pub fn bind(mut submission: Submission) -> Self {
        Self {
            transport: submission.bind(TRANSPORT, None, super::BindMode::Replace),
        }
    }

    /// A missing or blank reference is a field error; anything else is a
    /// reference to look up.
    pub fn validate(&self) -> Result<TransportRef, FieldErrors> {
        match coerce_i32(self.transport.as_ref()) {
            Coerced::Value(id) => Ok(TransportRef::Id(id)),
            Coerced::Invalid => Ok(TransportRef::Unresolvable),
            Coerced::Blank => {
                let mut errors = FieldErrors::new();
                errors.add(TRANSPORT, NOT_BLANK);
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode;

    fn validate(body: &str) -> Result<TransportRef, FieldErrors> {
        FavoriteDraft::bind(decode(body.as_bytes()).unwrap()).validate()
    }

    #[test]
    fn test_transport_reference() {
        assert_eq!(validate(r#"{"transport": 4}"#), Ok(TransportRef::Id(4)));
        assert_eq!(validate(r#"{"transport": "4"}"#), Ok(TransportRef::Id(4)));
        assert_eq!(validate(r#"{"transport": 0}"#), Ok(TransportRef::Id(0)));
        assert_eq!(
            validate(r#"{"transport": "bus"}"#),
            Ok(TransportRef::Unresolvable)
        );
        assert!(validate("{}").is_err());
        assert!(validate(r#"{"transport": null}"#).is_err());
    }
}
