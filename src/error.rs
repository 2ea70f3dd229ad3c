use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not Found")]
    NotFound,

    #[error("Duplicate Email {0}")]
    DuplicateEmail(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
