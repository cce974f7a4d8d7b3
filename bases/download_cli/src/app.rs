// bases/download_cli/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use media_downloader::{DownloadConfig, MediaDownloader};

pub struct App {
    config: DownloadConfig,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self {
            config: args.into(),
            output,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.config
            .validate()
            .wrap_err("configuration validation failed")?;
        tracing::debug!("writing to {}", self.config.output_dir.display());

        self.output.print_download_start(&self.config.url);

        let downloader = MediaDownloader::new();
        let output_dir = downloader.download(&self.config).await?;

        self.output.print_download_complete(&output_dir);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
