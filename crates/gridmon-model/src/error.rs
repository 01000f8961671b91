use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown result field tag: {0}")]
    UnknownFieldKind(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
