// components/media_downloader/src/config.rs
use crate::types::{DownloadError, Result};
use crate::utils::{absolute_path, ensure_dir, is_valid_dir};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_FORMAT: &str = "best";
pub const DEFAULT_QUALITY: &str = "best";
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

/// Everything needed for a single download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Directory the tool writes into; absolute after `validate`
    pub output_dir: PathBuf,

    /// Container extension (`mp4`, `webm`, ...) or `best`
    pub format: String,

    /// Height bucket such as `720p`, or `best`
    pub quality: String,

    pub audio_only: bool,

    /// Codec for audio extraction (`mp3`, `m4a`, ...)
    pub audio_format: String,

    pub playlist: bool,
    pub verbose: bool,
    pub url: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: DEFAULT_FORMAT.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
            audio_only: false,
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            playlist: false,
            verbose: false,
            url: String::new(),
        }
    }
}

impl DownloadConfig {
    /// Default configuration for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Check the URL and make the output directory absolute, creating it if needed
    pub fn validate(&mut self) -> Result<()> {
        if self.url.is_empty() {
            return Err(DownloadError::MissingUrl);
        }

        if self.output_dir.as_os_str().is_empty() {
            return Ok(());
        }

        let dir = absolute_path(&self.output_dir)
            .map_err(|e| DownloadError::output_dir(&self.output_dir, e))?;
        ensure_dir(&dir).map_err(|e| DownloadError::output_dir(&dir, e))?;

        if !is_valid_dir(&dir) {
            return Err(DownloadError::NotADirectory(dir));
        }

        // re-resolve now that the directory exists
        self.output_dir = absolute_path(&dir).map_err(|e| DownloadError::output_dir(&dir, e))?;
        Ok(())
    }
}
