use ollama_stream::{
    run_with_fallback, Client, EnvExecutionMode, ExecutionMode, Generate, GenerationRequest,
    Outcome,
};

use crate::prelude::*;

/// Runs the `run` command against the configured server.
pub fn run(
    args: &Args,
    run: RunArgs,
    sink: &mut dyn OutputSink,
    input: &mut dyn PromptInput,
) -> Result<()> {
    let url = args.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

    log::info!("url: {}", url);

    let request = resolve_request(run, input)?;
    let client = Client::new(url);
    let mut mode = match args.no_accelerator_env.as_deref() {
        Some(var) => EnvExecutionMode::new(var),
        None => EnvExecutionMode::default(),
    };

    generate(&client, &mut mode, &request, url, sink)
}

/// Runs a single request, with the memory fallback, and reports its outcome.
pub fn generate<G, M>(
    generator: &G,
    mode: &mut M,
    request: &GenerationRequest,
    url: &str,
    sink: &mut dyn OutputSink,
) -> Result<()>
where
    G: Generate + ?Sized,
    M: ExecutionMode + ?Sized,
{
    sink.line(
        &format!("🧠 Running model '{}' with prompt:", request.model()),
        Style::Header,
    )?;
    sink.line(&format!("{}\n", request.prompt()), Style::Plain)?;

    sink.start_spinner("Loading...")?;
    let outcome = run_with_fallback(generator, mode, request);
    sink.stop_spinner()?;

    log::debug!("outcome: {:#?}", outcome);

    if mode.is_degraded() && !outcome.is_retryable() {
        sink.line(
            &format!(
                "⚠️  Not enough memory for '{}', retried without hardware acceleration.",
                request.model()
            ),
            Style::Warning,
        )?;
    }

    match outcome {
        Outcome::Success(text) => {
            sink.line("🤖 Model Response:\n", Style::Success)?;
            sink.response(&text)?;
        }
        Outcome::RetryableMemoryError(body) => sink.line(
            &format!(
                "⚠️  Model '{}' needs more memory than is available, even without hardware acceleration: {}",
                request.model(),
                body.trim()
            ),
            Style::Warning,
        )?,
        Outcome::HttpError { status, body } => sink.line(
            &format!("⚠️  Error running model (HTTP {status}): {}", body.trim()),
            Style::Warning,
        )?,
        Outcome::ConnectionError => sink.line(
            &format!(
                "❌ Could not connect to the inference server at {url}. Please ensure Ollama is running (ollama serve)."
            ),
            Style::Error,
        )?,
        Outcome::UnexpectedError(message) => {
            sink.line(&format!("❗ Unexpected error: {message}"), Style::Error)?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct RecordingSink {
        pub lines: Vec<(String, Style)>,
        pub responses: Vec<String>,
        pub spinner_starts: usize,
    }

    impl OutputSink for RecordingSink {
        fn line(&mut self, text: &str, style: Style) -> Result<()> {
            self.lines.push((text.to_string(), style));
            Ok(())
        }

        fn response(&mut self, text: &str) -> Result<()> {
            self.responses.push(text.to_string());
            Ok(())
        }

        fn start_spinner(&mut self, _message: &str) -> Result<()> {
            self.spinner_starts += 1;
            Ok(())
        }
    }

    struct Scripted {
        outcomes: RefCell<VecDeque<Outcome>>,
        calls: RefCell<usize>,
    }

    impl Scripted {
        fn new(outcomes: Vec<Outcome>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                calls: RefCell::new(0),
            }
        }
    }

    impl Generate for Scripted {
        fn generate(&self, _request: &GenerationRequest) -> Outcome {
            *self.calls.borrow_mut() += 1;
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(Outcome::UnexpectedError("exhausted".to_string()))
        }
    }

    #[derive(Default)]
    struct Mode {
        degraded: bool,
    }

    impl ExecutionMode for Mode {
        fn force_no_accelerator(&mut self) {
            self.degraded = true;
        }

        fn is_degraded(&self) -> bool {
            self.degraded
        }
    }

    const URL: &str = "http://localhost:11434/api";

    fn request() -> GenerationRequest {
        GenerationRequest::new("llama3", "hello").unwrap()
    }

    #[test]
    fn test_success_prints_the_response() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let generator = Scripted::new(vec![Outcome::Success("Hi there".to_string())]);
        let mut sink = RecordingSink::default();

        generate(&generator, &mut Mode::default(), &request(), URL, &mut sink)?;

        assert_eq!(sink.responses, vec!["Hi there".to_string()]);
        assert_eq!(sink.lines[0].0, "🧠 Running model 'llama3' with prompt:");
        assert_eq!(sink.lines[1].0, "hello\n");
        assert_eq!(
            sink.lines[2],
            ("🤖 Model Response:\n".to_string(), Style::Success)
        );
        assert_eq!(sink.spinner_starts, 1);

        Ok(())
    }

    #[test]
    fn test_memory_error_retries_and_reports_fallback(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let generator = Scripted::new(vec![
            Outcome::RetryableMemoryError("model requires more system memory...".to_string()),
            Outcome::Success("ok".to_string()),
        ]);
        let mut mode = Mode::default();
        let mut sink = RecordingSink::default();

        generate(&generator, &mut mode, &request(), URL, &mut sink)?;

        assert_eq!(*generator.calls.borrow(), 2);
        assert!(mode.is_degraded());
        assert_eq!(sink.responses, vec!["ok".to_string()]);

        let notice = sink.lines.iter().find(|l| l.0.contains("retried"));
        assert_eq!(notice.map(|l| l.1), Some(Style::Warning));

        Ok(())
    }

    #[test]
    fn test_connection_error_is_reported_not_propagated(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let generator = Scripted::new(vec![Outcome::ConnectionError]);
        let mut mode = Mode::default();
        let mut sink = RecordingSink::default();

        generate(&generator, &mut mode, &request(), URL, &mut sink)?;

        assert_eq!(*generator.calls.borrow(), 1);
        assert!(!mode.is_degraded());
        assert!(sink.responses.is_empty());

        let (last, style) = sink.lines.last().unwrap();
        assert!(last.contains("Please ensure Ollama is running"));
        assert!(last.contains(URL));
        assert_eq!(*style, Style::Error);

        Ok(())
    }

    #[test]
    fn test_repeated_memory_error_is_final() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let generator = Scripted::new(vec![
            Outcome::RetryableMemoryError("model requires more system memory (8 GiB)".to_string()),
            Outcome::RetryableMemoryError("model requires more system memory (8 GiB)".to_string()),
        ]);
        let mut sink = RecordingSink::default();

        generate(&generator, &mut Mode::default(), &request(), URL, &mut sink)?;

        assert_eq!(*generator.calls.borrow(), 2);
        let (last, _) = sink.lines.last().unwrap();
        assert!(last.contains("even without hardware acceleration"));
        assert!(last.contains("(8 GiB)"));

        Ok(())
    }

    #[test]
    fn test_http_error_shows_status_and_body(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let generator = Scripted::new(vec![Outcome::HttpError {
            status: 404,
            body: "{\"error\":\"model 'llama3' not found\"}\n".to_string(),
        }]);
        let mut sink = RecordingSink::default();

        generate(&generator, &mut Mode::default(), &request(), URL, &mut sink)?;

        let (last, _) = sink.lines.last().unwrap();
        assert_eq!(
            last,
            "⚠️  Error running model (HTTP 404): {\"error\":\"model 'llama3' not found\"}"
        );

        Ok(())
    }
}
