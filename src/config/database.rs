use mongodb::{Client, Database};

use crate::config::settings::Settings;
use crate::error::AppError;

pub async fn connect(settings: &Settings) -> Result<Database, AppError> {
    let uri = settings
        .mongodb_uri
        .as_deref()
        .ok_or_else(|| AppError::Config("MONGODB_URI must be set".to_string()))?;

    let client = Client::with_uri_str(uri).await?;

    tracing::debug!(database = %settings.database, "connected to MongoDB");

    Ok(client.database(&settings.database))
}
