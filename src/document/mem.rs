use std::io::Read;
use pdf_extract::extract_text_from_mem_by_pages;
use super::{ExtractionFailure, PageSource, PdfBackend};

/// Decodes the whole document up front, then serves pages from memory.
pub struct PdfExtractBackend;

struct DecodedPages(Vec<String>);

impl PdfBackend for PdfExtractBackend {
    fn open(&self, source: &mut dyn Read) -> Result<Box<dyn PageSource>, ExtractionFailure> {
        let mut buffer = Vec::new();
        source.read_to_end(&mut buffer)?;

        let pages = extract_text_from_mem_by_pages(&buffer)
            .map_err(|e| ExtractionFailure::Parse(e.to_string()))?;
        Ok(Box::new(DecodedPages(pages)))
    }
}

impl PageSource for DecodedPages {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractionFailure> {
        self.0.get(index).cloned().ok_or_else(|| ExtractionFailure::Page {
            index,
            message: "no such page".to_string(),
        })
    }
}
