use std::io::Write;
use crate::document::ExtractionFailure;

pub const TEXT_START: &str = "----- PDF TEXT START -----";
pub const TEXT_END: &str = "----- PDF TEXT END -----";

/// Writes either the framed text or the single diagnostic line.
pub fn print_outcome(
    out: &mut dyn Write,
    outcome: &Result<String, ExtractionFailure>,
) -> std::io::Result<()> {
    match outcome {
        Ok(text) => {
            writeln!(out, "{}", TEXT_START)?;
            writeln!(out, "{}", text)?;
            writeln!(out, "{}", TEXT_END)?;
        }
        Err(e) => writeln!(out, "Error reading PDF: {}", e)?,
    }
    out.flush()
}
