use database_layer::DatabaseError;
use error_common::ServiceError;
use genai_service::GenAiError;
use history_ledger::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Generation(#[from] GenAiError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<EngineError> for ServiceError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Database(e) => e.into(),
            EngineError::Generation(e) => e.into(),
            EngineError::Ledger(e) => e.into(),
        }
    }
}
