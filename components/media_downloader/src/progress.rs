// components/media_downloader/src/progress.rs
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use regex::Regex;

static PROGRESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[download\]\s+(\d+(?:\.\d+)?)%").expect("progress pattern is valid")
});

/// Extract the completed percentage from a yt-dlp `[download]` line.
///
/// Fractions are truncated and the result is clamped to 100.
pub fn parse_progress(line: &str) -> Option<u8> {
    let captures = PROGRESS_LINE.captures(line)?;
    let percent: f64 = captures.get(1)?.as_str().parse().ok()?;
    Some(percent.clamp(0.0, 100.0) as u8)
}

/// Sink for the percentage of the current download
pub trait ProgressReporter: Send + Sync {
    fn set_percent(&self, percent: u8);

    /// Called once the tool has exited and its output is fully read
    fn finish(&self);
}

/// Progress bar drawn on the terminal
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::with_template("{msg} [{bar:50}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar.set_message(message.into());
        Self { bar }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new("downloading video...")
    }
}

impl ProgressReporter for TerminalProgress {
    fn set_percent(&self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
