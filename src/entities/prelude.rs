pub use super::favorite_transports::Entity as FavoriteTransports;
pub use super::transport_types::Entity as TransportTypes;
pub use super::transports::Entity as Transports;
pub use super::users::Entity as Users;
