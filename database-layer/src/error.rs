use error_common::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::PatientNotFound(id) => {
                ServiceError::NotFound(format!("Patient not found: {id}"))
            }
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}
