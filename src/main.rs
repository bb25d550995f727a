use std::path::PathBuf;
use clap::Parser;
use dotenv::dotenv;
use handler::Cli;
use serde::{Deserialize, Serialize};
use document::Backend;

mod handler;
mod document;

pub const DEFAULT_PDF_PATH: &str = "public/documents/Aflah_Muhammed.pdf";

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    std::panic::set_hook(Box::new(|info| log::error!("{}", info)));

    let config = read_config()?;
    let args = Cli::parse();
    handler::handler(args, config)?;
    Ok(())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    // Input
    default_path: PathBuf,

    // Extraction
    backend: Backend,
}

fn read_config() -> anyhow::Result<Config> {
    Ok(config::Config::builder()
        .set_default("default_path", DEFAULT_PDF_PATH)?
        .set_default("backend", "lopdf")?
        .add_source(config::File::with_name("read-pdf").required(false))
        .add_source(config::Environment::with_prefix("READ_PDF"))
        .build()?
        .try_deserialize::<Config>()?)
}
