// components/media_downloader/src/args.rs
//! Translation of a [`DownloadConfig`] into a yt-dlp argument vector.
//!
//! Flags come first; the target URL is always the last element.

use crate::config::DownloadConfig;
use url::Url;

const BEST: &str = "best";
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Build the ordered yt-dlp arguments for a configuration
pub fn build_args(config: &DownloadConfig) -> Vec<String> {
    let mut args = Vec::new();

    if config.audio_only {
        args.push("--extract-audio".to_string());
        args.push("--audio-format".to_string());
        args.push(config.audio_format.clone());
    } else {
        // plain "best" is left to the tool default
        let spec = format_spec(&config.format, &config.quality);
        if !spec.is_empty() && spec != BEST {
            args.push("--format".to_string());
            args.push(spec);
        }
    }

    args.push(if config.playlist { "--yes-playlist" } else { "--no-playlist" }.to_string());

    args.push("--output".to_string());
    args.push(
        config
            .output_dir
            .join(OUTPUT_TEMPLATE)
            .to_string_lossy()
            .into_owned(),
    );

    if !config.verbose {
        args.push("--no-warnings".to_string());
    }
    args.push("--newline".to_string());

    args.push(clean_url(&config.url));
    args
}

/// Format selector for the given container and height bucket
pub fn format_spec(format: &str, quality: &str) -> String {
    match (format == BEST, quality == BEST) {
        (true, true) => BEST.to_string(),
        (true, false) => {
            let height = extract_height(quality);
            format!("bestvideo[height<={height}]+bestaudio/best[height<={height}]")
        }
        (false, true) => format!("best[ext={format}]"),
        (false, false) => {
            let height = extract_height(quality);
            format!(
                "bestvideo[ext={format}][height<={height}]+bestaudio/best[ext={format}][height<={height}]"
            )
        }
    }
}

/// `"1080p"` -> `"1080"`; anything without the suffix passes through
pub fn extract_height(quality: &str) -> &str {
    quality.strip_suffix('p').unwrap_or(quality)
}

/// Drop shell escaping and normalize the URL when it parses
pub fn clean_url(raw: &str) -> String {
    let cleaned = raw.replace('\\', "");
    match Url::parse(&cleaned) {
        Ok(url) => url.to_string(),
        Err(_) => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    const URL: &str = "https://www.youtube.com/watch?v=test";

    fn value_of<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|arg| arg == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    fn has(args: &[String], flag: &str) -> bool {
        args.iter().any(|arg| arg == flag)
    }

    #[rstest]
    #[case::default_best("best", "best", "best")]
    #[case::quality_only("best", "1080p", "bestvideo[height<=1080]+bestaudio/best[height<=1080]")]
    #[case::format_only("mp4", "best", "best[ext=mp4]")]
    #[case::format_and_quality(
        "mp4",
        "720p",
        "bestvideo[ext=mp4][height<=720]+bestaudio/best[ext=mp4][height<=720]"
    )]
    #[case::bare_height("webm", "480", "bestvideo[ext=webm][height<=480]+bestaudio/best[ext=webm][height<=480]")]
    #[case::unknown_quality_passes_through("best", "4k", "bestvideo[height<=4k]+bestaudio/best[height<=4k]")]
    fn test_format_spec(#[case] format: &str, #[case] quality: &str, #[case] expected: &str) {
        assert_eq!(format_spec(format, quality), expected);
    }

    #[rstest]
    #[case("1080p", "1080")]
    #[case("720", "720")]
    #[case("best", "best")]
    #[case("", "")]
    fn test_extract_height(#[case] quality: &str, #[case] expected: &str) {
        assert_eq!(extract_height(quality), expected);
    }

    #[rstest]
    #[case::clean(URL, URL)]
    #[case::escaped("https://www.youtube.com/watch\\?v\\=test", URL)]
    #[case::escaped_real_id(
        "https://www.youtube.com/watch\\?v\\=P0YWWyeUTII",
        "https://www.youtube.com/watch?v=P0YWWyeUTII"
    )]
    #[case::short_host("https://x/y\\?v\\=Z", "https://x/y?v=Z")]
    #[case::unparsable_kept("not a url\\!", "not a url!")]
    fn test_clean_url(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_url(raw), expected);
    }

    #[test]
    fn test_default_config_args() {
        let config = DownloadConfig {
            output_dir: PathBuf::from("/downloads"),
            ..DownloadConfig::new("https://example.com/watch?v=test")
        };
        let args = build_args(&config);

        assert_eq!(
            args,
            vec![
                "--no-playlist",
                "--output",
                "/downloads/%(title)s.%(ext)s",
                "--no-warnings",
                "--newline",
                "https://example.com/watch?v=test",
            ]
        );
    }

    #[test]
    fn test_quality_and_format_flags() {
        let config = DownloadConfig {
            format: "mp4".to_string(),
            quality: "720p".to_string(),
            ..DownloadConfig::new(URL)
        };
        let args = build_args(&config);

        assert_eq!(
            value_of(&args, "--format"),
            Some("bestvideo[ext=mp4][height<=720]+bestaudio/best[ext=mp4][height<=720]")
        );
        assert!(!has(&args, "--extract-audio"));
    }

    #[test]
    fn test_best_best_emits_no_format_flag() {
        let args = build_args(&DownloadConfig::new(URL));
        assert_eq!(format_spec("best", "best"), "best");
        assert!(!has(&args, "--format"));
    }

    #[rstest]
    #[case::mp3("mp3")]
    #[case::m4a("m4a")]
    fn test_audio_only_suppresses_video_format(#[case] audio_format: &str) {
        let config = DownloadConfig {
            audio_only: true,
            audio_format: audio_format.to_string(),
            format: "mp4".to_string(),
            quality: "1080p".to_string(),
            ..DownloadConfig::new(URL)
        };
        let args = build_args(&config);

        assert!(has(&args, "--extract-audio"));
        assert_eq!(value_of(&args, "--audio-format"), Some(audio_format));
        assert!(!has(&args, "--format"));
    }

    #[rstest]
    #[case(true, "--yes-playlist", "--no-playlist")]
    #[case(false, "--no-playlist", "--yes-playlist")]
    fn test_playlist_flags_are_exclusive(
        #[case] playlist: bool,
        #[case] present: &str,
        #[case] absent: &str,
    ) {
        let config = DownloadConfig {
            playlist,
            ..DownloadConfig::new(URL)
        };
        let args = build_args(&config);

        assert_eq!(args.iter().filter(|arg| *arg == present).count(), 1);
        assert!(!has(&args, absent));
    }

    #[test]
    fn test_verbose_omits_warning_suppression() {
        let quiet = build_args(&DownloadConfig::new(URL));
        assert!(has(&quiet, "--no-warnings"));
        assert!(has(&quiet, "--newline"));

        let verbose = build_args(&DownloadConfig {
            verbose: true,
            ..DownloadConfig::new(URL)
        });
        assert!(!has(&verbose, "--no-warnings"));
        assert!(!has(&verbose, "--quiet"));
        assert!(has(&verbose, "--newline"));
    }

    #[test]
    fn test_url_is_last_and_cleaned() {
        let config = DownloadConfig {
            playlist: true,
            verbose: true,
            ..DownloadConfig::new("https://www.youtube.com/playlist\\?list\\=PL123")
        };
        let args = build_args(&config);

        assert_eq!(
            args.last().map(String::as_str),
            Some("https://www.youtube.com/playlist?list=PL123")
        );
    }
}
