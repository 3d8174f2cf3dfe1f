use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportType {
    pub id: i32,

    pub name: String,
}

/// A vehicle with its type reference already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    pub id: i32,

    pub number: i32,

    pub transport_type: TransportType,
}

impl Transport {
    #[must_use]
    pub const fn type_id(&self) -> i32 {
        self.transport_type.id
    }
}
