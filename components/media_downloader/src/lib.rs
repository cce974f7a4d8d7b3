// components/media_downloader/src/lib.rs
mod args;
mod config;
mod progress;
mod types;
mod utils;
mod ytdlp;

use std::path::PathBuf;
use std::sync::Arc;

pub use args::{build_args, clean_url, extract_height, format_spec};
pub use config::{
    DownloadConfig, DEFAULT_AUDIO_FORMAT, DEFAULT_FORMAT, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY,
};
pub use progress::{parse_progress, ProgressReporter, TerminalProgress};
pub use types::{DownloadError, Result};
pub use utils::{absolute_path, ensure_dir, is_valid_dir};
pub use ytdlp::{Downloader, Output, YtDlp};

pub struct MediaDownloader {
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl MediaDownloader {
    /// Create a MediaDownloader backed by `yt-dlp` from `PATH`
    pub fn new() -> Self {
        Self::new_with_downloader(Arc::new(YtDlp::new()))
    }

    /// Create a MediaDownloader with a specific downloader implementation
    pub fn new_with_downloader(downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        Self { downloader }
    }

    /// Download whatever `config.url` points at into `config.output_dir`.
    ///
    /// The configuration is expected to be validated already. Returns the
    /// directory the files were written to.
    pub async fn download(&self, config: &DownloadConfig) -> Result<PathBuf> {
        let version = self.downloader.check_available().await?;
        tracing::debug!("downloader version {}", version);
        tracing::debug!("starting download with config: {:?}", config);

        let args = build_args(config);

        if config.verbose {
            self.downloader
                .run(&args, &config.output_dir, Output::Passthrough)
                .await?;
        } else {
            let progress = TerminalProgress::default();
            self.downloader
                .run(&args, &config.output_dir, Output::Progress(&progress))
                .await?;
        }

        Ok(config.output_dir.clone())
    }
}

impl Default for MediaDownloader {
    fn default() -> Self {
        Self::new()
    }
}
