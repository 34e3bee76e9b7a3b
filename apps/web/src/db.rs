use anyhow::Result;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

pub const DB_NAME: &str = "aboutme";

/// Creates the MongoDB client and returns a handle to the application
/// database. The client connects lazily; an unreachable store surfaces on
/// first use, not here.
pub async fn connect(uri: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(DB_NAME.to_string());

    let client = Client::with_options(options)?;
    info!("MongoDB client initialized");

    Ok(client.database(DB_NAME))
}
