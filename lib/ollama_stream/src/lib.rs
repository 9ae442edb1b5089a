pub mod aggregator;
pub mod client;
pub mod decoder;
pub mod error;
pub mod fallback;
pub mod mode;
pub mod models;

pub use client::{Client, Generate, GenerationRequest, Outcome};
pub use fallback::run_with_fallback;
pub use mode::{EnvExecutionMode, ExecutionMode};
