use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Failed to enter directory: {}", path.display())]
    EnterDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
