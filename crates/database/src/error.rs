use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("DATABASE_URL is not set: {0}")]
    MissingUrl(#[source] dotenvy::Error),

    #[error(transparent)]
    Db(#[from] DbErr),

    /// A stored expression no longer matches the current JSON shape
    #[error("stored prerequisites of {course} are malformed: {source}")]
    MalformedExpression {
        course: String,
        source: serde_json::Error,
    },

    #[error("failed to serialize prerequisites: {0}")]
    Serialize(#[from] serde_json::Error),
}
