use thiserror::Error;

use crate::api::ApiError;
use crate::engine::RenderError;
use crate::session::SessionError;
use crate::share::DesktopError;

/// Top-level error for the binary and the one-shot commands
#[derive(Error, Debug)]
pub enum WdidError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Desktop(#[from] DesktopError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
