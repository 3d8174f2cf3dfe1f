//! Response DTOs, built per exposure group.
//!
//! Each group decides which fields of an entity a reader may see. DTOs are
//! constructed explicitly so a field can only appear if its group lists it.

use serde::Serialize;

use crate::models::transport::{Transport, TransportType};
use crate::models::user::User;

/// Who a representation is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureGroup {
    /// Transports and their types, for any reader.
    TransportPublic,
    /// A user as seen by anyone: email and roles.
    Public,
    /// A user looking at their own account.
    UserSelf,
    /// Everything, for administrators.
    RoleAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportTypeDto {
    pub id: i32,
    pub name: String,
}

impl From<&TransportType> for TransportTypeDto {
    fn from(kind: &TransportType) -> Self {
        Self {
            id: kind.id,
            name: kind.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportDto {
    pub id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    pub transport_type: TransportTypeDto,
}

impl From<&Transport> for TransportDto {
    fn from(transport: &Transport) -> Self {
        Self {
            id: transport.id,
            number: transport.number,
            transport_type: (&transport.transport_type).into(),
        }
    }
}

#[must_use]
pub fn transports(items: &[Transport]) -> Vec<TransportDto> {
    items.iter().map(TransportDto::from).collect()
}

#[must_use]
pub fn transport_types(items: &[TransportType]) -> Vec<TransportTypeDto> {
    items.iter().map(TransportTypeDto::from).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Password hash; only administrators see it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl UserDto {
    /// Projects `user` for `group`.
    ///
    /// [`ExposureGroup::TransportPublic`] carries no user fields.
    #[must_use]
    pub fn project(user: &User, group: ExposureGroup) -> Self {
        match group {
            ExposureGroup::TransportPublic => Self::default(),
            ExposureGroup::Public => Self {
                email: Some(user.email.clone()),
                roles: Some(user.roles()),
                ..Self::default()
            },
            ExposureGroup::UserSelf => Self {
                email: Some(user.email.clone()),
                roles: Some(user.roles()),
                api_token: Some(user.api_token.clone()),
                ..Self::default()
            },
            ExposureGroup::RoleAdmin => Self {
                id: Some(user.id),
                email: Some(user.email.clone()),
                roles: Some(user.roles()),
                password: Some(user.password_hash.clone()),
                api_token: Some(user.api_token.clone()),
            },
        }
    }
}

#[must_use]
pub fn users(items: &[User], group: ExposureGroup) -> Vec<UserDto> {
    items.iter().map(|u| UserDto::project(u, group)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ROLE_USER;
    use serde_json::json;

    fn user() -> User {
        User::new(
            4,
            "rider@example.com".to_string(),
            vec![],
            "$argon2id$hash".to_string(),
            "tok".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn test_transport_shape() {
        let transport = Transport {
            id: 1,
            number: 1001,
            transport_type: TransportType {
                id: 2,
                name: "Bus".to_string(),
            },
        };

        let value = serde_json::to_value(TransportDto::from(&transport)).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "number": 1001, "type": { "id": 2, "name": "Bus" } })
        );
    }

    #[test]
    fn test_public_hides_credentials() {
        let value = serde_json::to_value(UserDto::project(&user(), ExposureGroup::Public)).unwrap();
        assert_eq!(
            value,
            json!({ "email": "rider@example.com", "roles": [ROLE_USER] })
        );
    }

    #[test]
    fn test_user_self_shows_token_not_password() {
        let dto = UserDto::project(&user(), ExposureGroup::UserSelf);
        assert_eq!(dto.api_token.as_deref(), Some("tok"));
        assert!(dto.password.is_none());
        assert!(dto.id.is_none());
    }

    #[test]
    fn test_role_admin_shows_everything() {
        let value =
            serde_json::to_value(UserDto::project(&user(), ExposureGroup::RoleAdmin)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 4,
                "email": "rider@example.com",
                "roles": [ROLE_USER],
                "password": "$argon2id$hash",
                "api_token": "tok"
            })
        );
    }

    #[test]
    fn test_transport_public_has_no_user_fields() {
        let value =
            serde_json::to_value(UserDto::project(&user(), ExposureGroup::TransportPublic))
                .unwrap();
        assert_eq!(value, json!({}));
    }
}
