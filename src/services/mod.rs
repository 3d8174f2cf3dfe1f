pub mod favorite_service;
pub mod favorite_service_impl;
pub use favorite_service::{FavoriteError, FavoriteService};
pub use favorite_service_impl::SeaOrmFavoriteService;

pub mod transport_service;
pub mod transport_service_impl;
pub use transport_service::{TransportError, TransportService};
pub use transport_service_impl::SeaOrmTransportService;

pub mod transport_type_service;
pub mod transport_type_service_impl;
pub use transport_type_service::{TransportTypeError, TransportTypeService};
pub use transport_type_service_impl::SeaOrmTransportTypeService;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{UserError, UserService};
pub use user_service_impl::SeaOrmUserService;
