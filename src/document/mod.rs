pub mod pdf;
pub mod mem;

use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything that can go wrong between opening the file and the last page.
#[derive(Error, Debug)]
pub enum ExtractionFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(String),

    #[error("page {}: {message}", .index + 1)]
    Page { index: usize, message: String },
}

/// Builds a page reader over a binary stream.
pub trait PdfBackend {
    fn open(&self, source: &mut dyn Read) -> Result<Box<dyn PageSource>, ExtractionFailure>;
}

/// Pages of an opened document, addressed by zero-based index in document order.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String, ExtractionFailure>;
}

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    #[default]
    Lopdf,
    PdfExtract,
}

impl Backend {
    pub fn reader(self) -> Box<dyn PdfBackend> {
        match self {
            Backend::Lopdf => Box::new(pdf::LopdfBackend),
            Backend::PdfExtract => Box::new(mem::PdfExtractBackend),
        }
    }
}

/// Opens `path` and collects its text. A panicking backend is reported as a parse failure.
pub fn extract(path: &Path, backend: &dyn PdfBackend) -> Result<String, ExtractionFailure> {
    panic::catch_unwind(AssertUnwindSafe(|| -> Result<String, ExtractionFailure> {
        let mut file = File::open(path)?;
        let source = backend.open(&mut file)?;
        collect_pages(source.as_ref())
    }))
    .unwrap_or_else(|payload| Err(ExtractionFailure::Parse(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}

/// Concatenates every page's text with no separator. Stops at the first failing page.
pub fn collect_pages(source: &dyn PageSource) -> Result<String, ExtractionFailure> {
    let count = source.page_count();
    log::debug!("extracting {} pages", count);

    let mut text = String::new();
    for index in 0..count {
        text.push_str(&source.page_text(index)?);
    }
    Ok(text)
}
