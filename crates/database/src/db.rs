use crate::error::DatabaseError;
use sea_orm::{Database, DatabaseConnection};

const DATABASE_URL: &str = "DATABASE_URL";

/// Reads the connection string from the environment, honouring a `.env` file
pub fn database_url() -> Result<String, DatabaseError> {
    dotenvy::var(DATABASE_URL).map_err(DatabaseError::MissingUrl)
}

/// Creates a database connection
pub async fn create_connection() -> Result<DatabaseConnection, DatabaseError> {
    connect(&database_url()?).await
}

/// Creates a database connection to an explicit URL
pub async fn connect(url: &str) -> Result<DatabaseConnection, DatabaseError> {
    Ok(Database::connect(url).await?)
}
