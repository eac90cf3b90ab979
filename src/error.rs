use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeViewError>;

#[derive(Debug, Error)]
pub enum TreeViewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tree data: {0}")]
    Data(#[from] serde_json::Error),
    #[error("{0}")]
    Generic(String),
}

impl From<String> for TreeViewError {
    fn from(message: String) -> Self {
        TreeViewError::Generic(message)
    }
}

impl From<&str> for TreeViewError {
    fn from(message: &str) -> Self {
        TreeViewError::Generic(message.to_string())
    }
}
