use std::io::Read;
use lopdf::Document;
use super::{ExtractionFailure, PageSource, PdfBackend};

pub struct LopdfBackend;

struct LopdfPages {
    document: Document,
    numbers: Vec<u32>,
}

impl PdfBackend for LopdfBackend {
    fn open(&self, source: &mut dyn Read) -> Result<Box<dyn PageSource>, ExtractionFailure> {
        let document = Document::load_from(source)
            .map_err(|e| ExtractionFailure::Parse(e.to_string()))?;
        // get_pages is keyed by page number, so the keys are already in document order
        let numbers = document.get_pages().into_keys().collect();
        Ok(Box::new(LopdfPages { document, numbers }))
    }
}

impl PageSource for LopdfPages {
    fn page_count(&self) -> usize {
        self.numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractionFailure> {
        let page = |message: String| ExtractionFailure::Page { index, message };
        let number = self.numbers
            .get(index)
            .ok_or_else(|| page("no such page".to_string()))?;
        let text = self.document
            .extract_text(&[*number])
            .map_err(|e| page(e.to_string()))?;
        // lopdf closes every text object with a newline; drop the last one so pages run together
        Ok(match text.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}
