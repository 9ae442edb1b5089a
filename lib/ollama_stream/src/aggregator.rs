use serde::Deserialize;

/// A single record of the `/generate` stream.
///
/// Only the text delta matters. Every other field the server sends (`done`, `model`,
/// `context`, timings...) is ignored.
#[derive(Debug, Deserialize, Default)]
pub struct StreamRecord {
    /// Incremental fragment of the generated text.
    #[serde(default)]
    pub response: Option<String>,
    /// Error reported by the server after the stream already started.
    #[serde(default)]
    pub error: Option<String>,
}

/// Applies one raw record to the accumulated text.
///
/// Records that can't be decoded are skipped and the accumulator is returned untouched.
#[must_use]
pub fn apply(mut accumulator: String, line: &[u8]) -> String {
    match serde_json::from_slice::<StreamRecord>(line) {
        Ok(record) => {
            if let Some(error) = record.error {
                log::warn!("server reported an error mid-stream: {error}");
            }
            if let Some(delta) = record.response {
                accumulator.push_str(&delta);
            }
        }
        Err(e) => {
            log::debug!(
                "dropping malformed record ({e}): {}",
                String::from_utf8_lossy(line)
            );
        }
    }

    accumulator
}

/// Turns the accumulated text into the reported result.
#[must_use]
pub fn finish(accumulator: String) -> String {
    accumulator.trim().to_string()
}

/// Folds a stream of raw records into the final text, stopping at the first read error.
pub fn aggregate<I>(lines: I) -> std::io::Result<String>
where
    I: IntoIterator<Item = std::io::Result<Vec<u8>>>,
{
    let accumulator = lines
        .into_iter()
        .try_fold(String::new(), |accumulator, line| {
            line.map(|line| apply(accumulator, &line))
        })?;

    Ok(finish(accumulator))
}
