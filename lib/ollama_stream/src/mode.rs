/// Default environment variable read by the inference runtime to skip hardware acceleration.
pub const DEFAULT_NO_ACCELERATOR_ENV: &str = "OLLAMA_NO_GPU";

/// Process-wide execution mode of the inference runtime.
///
/// Starts in normal mode and can only move to the degraded mode, never back.
pub trait ExecutionMode {
    /// Forces the runtime to run without hardware acceleration.
    fn force_no_accelerator(&mut self);

    fn is_degraded(&self) -> bool;
}

/// Execution mode toggled through an environment variable of the current process.
#[derive(Debug, Clone)]
pub struct EnvExecutionMode {
    var: String,
    degraded: bool,
}

impl EnvExecutionMode {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            degraded: false,
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvExecutionMode {
    fn default() -> Self {
        Self::new(DEFAULT_NO_ACCELERATOR_ENV)
    }
}

impl ExecutionMode for EnvExecutionMode {
    fn force_no_accelerator(&mut self) {
        log::info!("setting {}=1", self.var);
        std::env::set_var(&self.var, "1");
        self.degraded = true;
    }

    fn is_degraded(&self) -> bool {
        self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_normal_mode() {
        let var = "OLLAMA_STREAM_TEST_NORMAL_MODE";
        let mode = EnvExecutionMode::new(var);

        assert!(!mode.is_degraded());
        assert!(std::env::var(var).is_err());
    }

    #[test]
    fn test_force_no_accelerator_sets_the_variable() {
        let var = "OLLAMA_STREAM_TEST_DEGRADED_MODE";
        let mut mode = EnvExecutionMode::new(var);

        mode.force_no_accelerator();

        assert!(mode.is_degraded());
        assert_eq!(std::env::var(var).as_deref(), Ok("1"));
    }

    #[test]
    fn test_default_variable() {
        assert_eq!(
            EnvExecutionMode::default().var(),
            DEFAULT_NO_ACCELERATOR_ENV
        );
    }
}
