pub mod prelude;

pub mod favorite_transports;
pub mod transport_types;
pub mod transports;
pub mod users;
