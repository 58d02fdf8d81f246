use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid field {0}: {1}")]
    InvalidField(String, String),
}
