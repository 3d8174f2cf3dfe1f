use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::domain::{Authorizer, RoleAuthorizer};
use crate::services::{
    FavoriteService, SeaOrmFavoriteService, SeaOrmTransportService, SeaOrmTransportTypeService,
    SeaOrmUserService, TransportService, TransportTypeService, UserService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub authorizer: Arc<dyn Authorizer>,

    pub transport_type_service: Arc<dyn TransportTypeService>,

    pub transport_service: Arc<dyn TransportService>,

    pub favorite_service: Arc<dyn FavoriteService>,

    pub user_service: Arc<dyn UserService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services over an already opened store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let transport_type_service = Arc::new(SeaOrmTransportTypeService::new(store.clone()));
        let transport_service = Arc::new(SeaOrmTransportService::new(store.clone()));
        let favorite_service = Arc::new(SeaOrmFavoriteService::new(store.clone()));
        let user_service = Arc::new(SeaOrmUserService::new(
            store.clone(),
            config.security.clone(),
        ));

        Self {
            config: Arc::new(config),
            store,
            authorizer: Arc::new(RoleAuthorizer::default()),
            transport_type_service,
            transport_service,
            favorite_service,
            user_service,
        }
    }
}
