// components/media_downloader/src/ytdlp.rs
use crate::progress::{parse_progress, ProgressReporter};
use crate::types::{DownloadError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc::{self, UnboundedSender};

const YT_DLP: &str = "yt-dlp";

/// How the tool's stdout and stderr are handled
pub enum Output<'a> {
    /// Inherit the caller's streams, nothing is parsed
    Passthrough,
    /// Pipe both streams and feed `[download]` percentages to the reporter
    Progress(&'a dyn ProgressReporter),
}

#[async_trait]
pub trait Downloader {
    /// Check that the tool is installed and runnable, returning its version
    async fn check_available(&self) -> Result<String>;

    /// Run the tool with `args` inside `working_dir` until it exits
    async fn run(&self, args: &[String], working_dir: &Path, output: Output<'_>) -> Result<()>;
}

pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    pub fn new() -> Self {
        Self::with_program(YT_DLP)
    }

    /// Use a specific executable instead of `yt-dlp` from `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn command(&self, args: &[String], working_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args).stdin(Stdio::null());
        // empty means the caller's current directory
        if !working_dir.as_os_str().is_empty() {
            command.current_dir(working_dir);
        }
        command
    }

    async fn run_with_progress(
        &self,
        mut command: Command,
        reporter: &dyn ProgressReporter,
    ) -> Result<ExitStatus> {
        let mut child = match command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(source) => {
                reporter.finish();
                return Err(DownloadError::Spawn {
                    program: self.name(),
                    source,
                });
            }
        };

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("stderr was not captured"))?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let stdout_reader = tokio::spawn(scan_progress(stdout, tx.clone()));
        let stderr_reader = tokio::spawn(scan_progress(stderr, tx));

        // The channel closes once both readers hit end of stream
        let display = async {
            while let Some(percent) = rx.recv().await {
                reporter.set_percent(percent);
            }
        };

        let (status, (), stdout_lines, stderr_lines) =
            tokio::join!(child.wait(), display, stdout_reader, stderr_reader);
        reporter.finish();

        let stdout_lines = stdout_lines.map_err(std::io::Error::other)??;
        let stderr_lines = stderr_lines.map_err(std::io::Error::other)??;
        tracing::debug!(stdout_lines, stderr_lines, "{} output drained", self.name());

        Ok(status?)
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<String> {
        let resolved = which::which(&self.program)
            .map_err(|e| DownloadError::dependency_not_found(self.name(), e))?;

        let output = Command::new(&resolved)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DownloadError::dependency_not_found(self.name(), e))?;

        if !output.status.success() {
            return Err(DownloadError::dependency_not_found(
                self.name(),
                format!("{} --version exited with {}", resolved.display(), output.status),
            ));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!("found {} version {}", resolved.display(), version);
        Ok(version)
    }

    async fn run(&self, args: &[String], working_dir: &Path, output: Output<'_>) -> Result<()> {
        tracing::debug!("executing: {} {}", self.name(), args.join(" "));
        let command = self.command(args, working_dir);

        let status = match output {
            Output::Passthrough => {
                let mut command = command;
                command
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .map_err(|source| DownloadError::Spawn {
                        program: self.name(),
                        source,
                    })?
            }
            Output::Progress(reporter) => self.run_with_progress(command, reporter).await?,
        };

        if !status.success() {
            return Err(DownloadError::ExecutionFailed {
                program: self.name(),
                status,
            });
        }

        Ok(())
    }
}

/// Read `stream` line by line until EOF, forwarding every percentage found.
///
/// Lines are raw bytes; invalid UTF-8 is replaced rather than rejected.
/// Returns the number of lines read.
async fn scan_progress<R>(stream: R, progress: UnboundedSender<u8>) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        count += 1;
        let line = String::from_utf8_lossy(&buf);
        match parse_progress(&line) {
            // receiver only goes away once the run is over
            Some(percent) => {
                let _ = progress.send(percent);
            }
            None => tracing::trace!("ignored output: {}", line.trim_end()),
        }
    }

    Ok(count)
}
