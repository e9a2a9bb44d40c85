use thiserror::Error;

/// Errors raised while turning a prompt record into segments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid prompt record: {0}")]
    InvalidInput(String),

    #[error("Word pattern error: {0}")]
    Pattern(String),
}

impl From<regex::Error> for RenderError {
    fn from(err: regex::Error) -> Self {
        RenderError::Pattern(err.to_string())
    }
}
