use crate::client::{Generate, GenerationRequest, Outcome};
use crate::mode::ExecutionMode;

/// Runs a generation and, if the model didn't fit in memory, retries it once without hardware
/// acceleration.
///
/// The execution mode is only touched between the two attempts. A second memory error is
/// returned as is.
pub fn run_with_fallback<G, M>(generator: &G, mode: &mut M, request: &GenerationRequest) -> Outcome
where
    G: Generate + ?Sized,
    M: ExecutionMode + ?Sized,
{
    let outcome = generator.generate(request);

    if !outcome.is_retryable() {
        return outcome;
    }

    log::warn!(
        "model '{}' needs more memory than available, retrying without hardware acceleration",
        request.model()
    );

    mode.force_no_accelerator();

    generator.generate(request)
}
