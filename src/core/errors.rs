use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The root directory could not be enumerated. This is the only fatal
    /// listing failure; per-entry problems never surface as errors. The
    /// message must stay on one line, hence the escaped `{:?}` path.
    #[error("{source}: {path:?}")]
    Unlistable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("json output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("listing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
