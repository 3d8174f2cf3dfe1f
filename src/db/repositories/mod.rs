pub mod favorite;
pub mod transport;
pub mod transport_type;
pub mod user;
