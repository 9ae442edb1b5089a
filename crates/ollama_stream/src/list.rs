use ollama_stream::error::Error as StreamError;
use ollama_stream::models::{list_models, DEFAULT_RUNTIME};

use crate::prelude::*;

pub fn run(args: &Args, sink: &mut dyn OutputSink) -> Result<()> {
    let runtime = args.runtime.as_deref().unwrap_or(DEFAULT_RUNTIME);

    report(list_models(runtime), sink)
}

/// Prints the listing, or a message describing why it couldn't be produced.
pub fn report(
    listing: std::result::Result<String, StreamError>,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    match listing {
        Ok(output) => {
            sink.line("Available Ollama Models:\n", Style::Header)?;
            sink.line(&output, Style::Plain)?;
        }
        Err(StreamError::RuntimeNotFound(runtime)) => {
            log::info!("runtime not found: {runtime}");
            sink.line(
                "❌ Ollama not found. Please install Ollama from https://ollama.com/ first.",
                Style::Error,
            )?;
        }
        Err(StreamError::ListFailed(stderr)) => sink.line(
            &format!("⚠️  Error listing models: {}", stderr.trim()),
            Style::Warning,
        )?,
        Err(e) => sink.line(&format!("❗ Unexpected error: {e}"), Style::Error)?,
    }

    Ok(())
}
