use mongodb::{Client, Database, bson::doc};
use tokio::time::sleep;
use tracing::{debug, info};

use super::{
    config::MongoConfig,
    error::{MongoDaoError, MongoResult},
};

/// Open a client on the archive database and wait for it to answer a ping,
/// backing off as configured in [`MongoConfig::connect_retry`].
pub async fn open_archive(config: &MongoConfig) -> MongoResult<(Client, Database)> {
    let client = Client::with_options(config.options.clone())
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(&config.database_name);
    let retry = config.connect_retry;

    let mut failed = 0;
    loop {
        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                info!(
                    database = %config.database_name,
                    attempts = failed + 1,
                    "match archive reachable"
                );
                return Ok((client, database));
            }
            Err(source) => {
                failed += 1;
                if failed >= retry.max_attempts {
                    return Err(MongoDaoError::InitialPing {
                        attempts: failed,
                        source,
                    });
                }
                let delay = retry.delay_after(failed);
                debug!(
                    failed,
                    delay_ms = delay.as_millis() as u64,
                    database = %config.database_name,
                    "match archive not reachable yet"
                );
                sleep(delay).await;
            }
        }
    }
}
