// components/media_downloader/src/types.rs
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("URL is required")]
    MissingUrl,

    #[error("failed to create output directory {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("{program} dependency check failed: {reason}")]
    DependencyNotFound { program: String, reason: String },

    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} execution failed: {status}")]
    ExecutionFailed { program: String, status: ExitStatus },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    pub fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DownloadError::OutputDir {
            path: path.into(),
            source,
        }
    }

    pub fn dependency_not_found(program: impl Into<String>, reason: impl ToString) -> Self {
        DownloadError::DependencyNotFound {
            program: program.into(),
            reason: reason.to_string(),
        }
    }

    /// Exit code of a failed run, if the tool exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DownloadError::ExecutionFailed { status, .. } => status.code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DownloadError>;
