use serde_json::Value;

use super::{BindMode, FieldErrors, NOT_VALID, Submission};
use crate::domain::is_valid_role_name;

pub const ROLES: &str = "roles";
pub const PASSWORD: &str = "password";

pub const PASSWORD_MIN_LEN: usize = 8;

/// Admin changes to an account. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDraft {
    roles: Option<Value>,
    password: Option<Value>,
    extra: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountChanges {
    pub roles: Option<Vec<String>>,
    pub password: Option<String>,
}

impl AccountDraft {
    #[must_use]
    pub fn bind(mut submission: Submission) -> Self {
        let roles = submission.bind(ROLES, None, BindMode::Merge);
        let password = submission.bind(PASSWORD, None, BindMode::Merge);

        Self {
            roles,
            password,
            extra: submission.into_extra_fields(),
        }
    }

    pub fn validate(&self) -> Result<AccountChanges, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.add_extra_fields(&self.extra);

        let roles = self.roles.as_ref().and_then(|value| {
            let parsed = value.as_array().and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().filter(|r| is_valid_role_name(r)))
                    .map(|role| role.map(str::to_string))
                    .collect::<Option<Vec<String>>>()
            });
            if parsed.is_none() {
                errors.add(ROLES, NOT_VALID);
            }
            parsed
        });

        let password = self.password.as_ref().and_then(|value| match value.as_str() {
            Some(p) if p.chars().count() >= PASSWORD_MIN_LEN => Some(p.to_string()),
            Some(_) => {
                errors.add(
                    PASSWORD,
                    format!(
                        "This value is too short. It should have {PASSWORD_MIN_LEN} characters or more."
                    ),
                );
                None
            }
            None => {
                errors.add(PASSWORD, NOT_VALID);
                None
            }
        });

        if errors.is_empty() {
            Ok(AccountChanges { roles, password })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode;

    fn validate(body: &str) -> Result<AccountChanges, FieldErrors> {
        AccountDraft::bind(decode(body.as_bytes()).unwrap()).validate()
    }

    #[test]
    fn test_empty_changes() {
        assert_eq!(validate("{}"), Ok(AccountChanges::default()));
    }

    #[test]
    fn test_roles() {
        let changes = validate(r#"{"roles": ["ROLE_ADMIN", "ROLE_DISPATCHER"]}"#).unwrap();
        assert_eq!(
            changes.roles,
            Some(vec!["ROLE_ADMIN".to_string(), "ROLE_DISPATCHER".to_string()])
        );

        assert!(validate(r#"{"roles": ["admin"]}"#).is_err());
        assert!(validate(r#"{"roles": "ROLE_ADMIN"}"#).is_err());
        assert!(validate(r#"{"roles": [1]}"#).is_err());
    }

    #[test]
    fn test_password() {
        let changes = validate(r#"{"password": "correct horse"}"#).unwrap();
        assert_eq!(changes.password.as_deref(), Some("correct horse"));

        let errors = validate(r#"{"password": "short"}"#).unwrap_err();
        assert!(errors.get(PASSWORD).is_some());
        assert!(validate(r#"{"password": 12345678}"#).is_err());
    }
}
