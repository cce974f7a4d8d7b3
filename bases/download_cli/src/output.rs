// bases/download_cli/src/output.rs
use std::path::Path;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, url: &str) {
        if self.verbose {
            println!("Starting download from: {}", url);
        }
    }

    pub fn print_download_complete(&self, output_dir: &Path) {
        println!("download completed successfully in {}", output_dir.display());
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error_message(error));
    }
}

/// Render an error with all of its causes on one line
fn error_message(error: &color_eyre::Report) -> String {
    error
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
