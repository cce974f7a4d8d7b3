// bases/download_cli/src/args.rs
use clap::Parser;
use media_downloader::{
    DownloadConfig, DEFAULT_AUDIO_FORMAT, DEFAULT_FORMAT, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY,
};
use std::path::PathBuf;

/// Download videos and audio from streaming sites via yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL to download from
    pub url: String,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Video format (mp4, webm, best)
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Video quality (720p, 1080p, best)
    #[arg(short, long, default_value = DEFAULT_QUALITY)]
    pub quality: String,

    /// Download audio only
    #[arg(short, long)]
    pub audio_only: bool,

    /// Audio format (mp3, m4a)
    #[arg(long, default_value = DEFAULT_AUDIO_FORMAT)]
    pub audio_format: String,

    /// Download the entire playlist
    #[arg(long)]
    pub playlist: bool,

    /// Show the tool's own output instead of a progress bar
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for DownloadConfig {
    fn from(args: Args) -> Self {
        DownloadConfig {
            output_dir: args.output,
            format: args.format,
            quality: args.quality,
            audio_only: args.audio_only,
            audio_format: args.audio_format,
            playlist: args.playlist,
            verbose: args.verbose,
            url: args.url,
        }
    }
}
