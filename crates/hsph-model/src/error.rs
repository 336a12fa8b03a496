use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid domain identifier: {0:?}")]
    InvalidDomain(String),
}
