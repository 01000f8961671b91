use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed reply document: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type RpcResult<T> = Result<T, ExtractError>;
