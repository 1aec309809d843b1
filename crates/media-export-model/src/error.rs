use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid {kind} value '{value}'")]
    InvalidId { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
