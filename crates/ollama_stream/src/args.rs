use clap::{Parser, Subcommand};

#[derive(Default, Clone, Debug, Parser, PartialEq)]
#[command(name = "ollama-stream", version)]
#[command(about = "Interact with locally installed Ollama models through the terminal")]
#[command(
    long_about = "This Rust-based CLI lists the language models installed in your local Ollama
runtime and runs prompts against them.

Responses are streamed from the local inference server and assembled before being printed.
If the server reports that the model needs more memory than is available, the request is
retried once with hardware acceleration disabled."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// The inference server api base url.
    #[clap(long, env = "OLLAMA_STREAM_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// The model runtime binary used to list models.
    #[clap(long, env = "OLLAMA_STREAM_RUNTIME", global = true)]
    pub runtime: Option<String>,

    /// Environment variable set before retrying without hardware acceleration.
    #[clap(long, global = true)]
    pub no_accelerator_env: Option<String>,

    /// Don't run the spinner
    #[clap(long, global = true)]
    pub quiet: bool,

    /// Don't use colors to print the output.
    #[clap(long, global = true)]
    pub no_color: bool,

    /// Language to use for syntax highlight
    #[clap(long, global = true)]
    pub language: Option<String>,

    /// Theme to use for syntax highlight
    #[clap(long, global = true)]
    pub theme: Option<String>,

    /// Config dir where the configuration file will be stored.
    #[clap(long, default_value = "~/.config/ollama-stream", global = true)]
    pub config_dir: Option<String>,

    /// Config file. If undefined, it will be set as `config_dir/config.toml`.
    #[clap(long, global = true)]
    pub config_file: Option<String>,
}

#[derive(Clone, Debug, Subcommand, PartialEq)]
pub enum Command {
    /// List all installed Ollama models
    List,
    /// Run a model with your prompt
    Run(RunArgs),
}

#[derive(Default, Clone, Debug, clap::Args, PartialEq)]
pub struct RunArgs {
    /// Name of the Ollama model (e.g., llama3, codellama)
    #[arg(value_name = "MODEL")]
    pub model_arg: Option<String>,

    /// Text input for the model. Multiple words are joined by spaces.
    #[arg(value_name = "PROMPT")]
    pub prompt_words: Vec<String>,

    /// The model to use. Overrides the positional model.
    #[arg(short, long)]
    pub model: Option<String>,

    /// The prompt to send. Overrides the positional prompt.
    #[arg(short, long)]
    pub prompt: Option<String>,
}
