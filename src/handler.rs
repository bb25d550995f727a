use std::io::Write;
use std::path::PathBuf;
use clap::Parser;
use crate::document::{self, Backend};
use crate::Config;

pub mod print;

#[derive(Parser, Debug)]
#[command(name = "read-pdf")]
#[command(about = "Print the plain text of a PDF document", version = "0.1")]
pub struct Cli {
    #[arg(help = "PDF file to read; falls back to the configured default path")]
    pub path: Option<PathBuf>,

    #[arg(long, value_enum, help = "PDF library used to extract the text")]
    pub backend: Option<Backend>,
}

impl Cli {
    pub fn resolve_path(&self, config: &Config) -> PathBuf {
        self.path.clone().unwrap_or_else(|| config.default_path.clone())
    }

    pub fn resolve_backend(&self, config: &Config) -> Backend {
        self.backend.unwrap_or(config.backend)
    }
}

pub fn handler(args: Cli, config: Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    run(args, config, &mut stdout.lock())
}

pub fn run(args: Cli, config: Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = args.resolve_path(&config);
    let backend = args.resolve_backend(&config);
    log::info!("reading {} with {:?}", path.display(), backend);

    let outcome = document::extract(&path, backend.reader().as_ref());
    if let Err(e) = &outcome {
        log::debug!("extraction failed: {:?}", e);
    }

    print::print_outcome(out, &outcome)?;
    Ok(())
}
