use anyhow::Result;
use ollama_stream::{run_with_fallback, Client, EnvExecutionMode, GenerationRequest, Outcome};

fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new("http://localhost:11434/api");
    let mut mode = EnvExecutionMode::default();

    let request = GenerationRequest::new(
        "llama3.2:latest",
        "What is the capital of the United States?",
    )?;

    match run_with_fallback(&client, &mut mode, &request) {
        Outcome::Success(text) => println!("{text}"),
        outcome => eprintln!("{outcome:?}"),
    }

    Ok(())
}
