pub mod transport;
pub mod user;
