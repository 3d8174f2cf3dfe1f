//! Sample data for demos and manual testing

use crate::config::Config;
use crate::db::Store;
use crate::forms::transport::TransportInput;
use crate::models::transport::Transport;

pub const SAMPLE_TYPES: [&str; 3] = ["Bus", "Tram", "Trolleybus"];

/// Ensures the sample types exist and adds `count` transports spread
/// across them, numbered from 1001.
pub async fn seed_sample_data(store: &Store, count: u32) -> anyhow::Result<Vec<Transport>> {
    let mut types = Vec::with_capacity(SAMPLE_TYPES.len());
    for name in SAMPLE_TYPES {
        types.push(store.find_or_create_transport_type(name).await?);
    }

    let mut created = Vec::new();
    for (i, kind) in (0..count).zip(types.iter().cycle()) {
        let number = 1001 + i32::try_from(i)?;
        created.push(
            store
                .create_transport(TransportInput {
                    number,
                    type_id: kind.id,
                })
                .await?,
        );
    }

    Ok(created)
}

pub async fn cmd_seed(config: &Config, count: u32) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let created = seed_sample_data(&store, count).await?;
    println!(
        "✓ Seeded {} transports across {} types",
        created.len(),
        SAMPLE_TYPES.len()
    );

    Ok(())
}
