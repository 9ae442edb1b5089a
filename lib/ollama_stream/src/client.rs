use serde::Serialize;
use std::io::{BufReader, Read};

use crate::aggregator;
use crate::decoder::LineDecoder;
use crate::error::Error;

// Generate API
const GENERATE_API: &str = "/generate";

/// Substring the server uses when a model doesn't fit in the available memory.
pub const MEMORY_ERROR_SIGNATURE: &str = "model requires more system memory";

/// A single generation request.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GenerationRequest {
    model: String,
    prompt: String,
}

impl GenerationRequest {
    /// Creates a new `GenerationRequest`. The model name can't be empty.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Result<Self, Error> {
        let model = model.into();

        if model.trim().is_empty() {
            return Err(Error::EmptyModel);
        }

        Ok(Self {
            model,
            prompt: prompt.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Result of a single generation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The stream completed. Holds the trimmed, aggregated text.
    Success(String),
    /// The server rejected the request because the model needs more memory than available.
    RetryableMemoryError(String),
    /// Any other non-200 response.
    HttpError { status: u16, body: String },
    /// The server couldn't be reached.
    ConnectionError,
    /// Anything else that went wrong during the attempt.
    UnexpectedError(String),
}

impl Outcome {
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Outcome::RetryableMemoryError(_))
    }

    /// Classifies a non-200 response body.
    #[must_use]
    pub fn from_error_body(status: u16, body: String) -> Self {
        if body.contains(MEMORY_ERROR_SIGNATURE) {
            Outcome::RetryableMemoryError(body)
        } else {
            Outcome::HttpError { status, body }
        }
    }
}

/// Something that can run one generation attempt.
pub trait Generate {
    fn generate(&self, request: &GenerationRequest) -> Outcome;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub api_url: String,
    agent: ureq::Agent,
}

impl Client {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    fn generate_url(&self) -> String {
        self.api_url.clone() + GENERATE_API
    }
}

impl Generate for Client {
    fn generate(&self, request: &GenerationRequest) -> Outcome {
        let url = self.generate_url();

        log::info!("url: {}", url);
        log::debug!("request: {:#?}", request);

        let response = match self
            .agent
            .post(&url)
            .set("content-type", "application/json")
            .set("accept", "application/x-ndjson")
            .send_json(request)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = read_error_body(response);
                log::debug!("status: {status}, body: {body}");
                return Outcome::from_error_body(status, body);
            }
            Err(ureq::Error::Transport(transport)) => {
                return match transport.kind() {
                    ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                        log::info!("connection failed: {transport}");
                        Outcome::ConnectionError
                    }
                    _ => Outcome::UnexpectedError(transport.to_string()),
                };
            }
        };

        let status = response.status();

        if status != 200 {
            let body = read_error_body(response);
            return Outcome::from_error_body(status, body);
        }

        let lines = LineDecoder::new(BufReader::new(response.into_reader()));

        match aggregator::aggregate(lines) {
            Ok(text) => Outcome::Success(text),
            Err(e) => Outcome::UnexpectedError(format!("stream interrupted: {e}")),
        }
    }
}

/// Reads a whole error body. Invalid UTF-8 is replaced rather than dropping the body.
fn read_error_body(response: ureq::Response) -> String {
    let mut body = Vec::new();
    let mut reader = response.into_reader();

    if let Err(e) = reader.read_to_end(&mut body) {
        log::debug!("error body ended early: {e}");
    }

    String::from_utf8_lossy(&body).into_owned()
}
