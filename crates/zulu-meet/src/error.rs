//! Error types for zulu-meet operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZuluError {
    #[error("Invalid locale document: {0}")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, ZuluError>;
