pub mod project_service;
pub mod summary_service;
pub mod transaction_service;
pub mod user_service;

pub use project_service::ProjectService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
pub use user_service::UserService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
}
