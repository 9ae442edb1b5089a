use config_file::FromConfigFile;
use ollama_stream::GenerationRequest;

pub use crate::args::{Args, Command, RunArgs};
pub use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_THEME};
pub use crate::error::Error;
pub use crate::input::PromptInput;
pub use crate::printer::{OutputSink, Style};

pub type Result<T> = std::result::Result<T, Error>;

/// Reads the configuration file. If it or the config directory doesn't exist, they'll be created.
pub fn build_config(mut args: Args) -> Result<(Args, Config)> {
    let home = std::env::var("HOME")?;
    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or("~/.config/ollama-stream".to_string())
        .replace('~', &home);
    args.config_dir = Some(config_dir.clone());

    if !std::path::Path::new(&config_dir).exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    let config_file = match args.config_file.take() {
        Some(config_file) => config_file.replace('~', &home),
        None => config_dir.to_string() + "/config.toml",
    };
    args.config_file = Some(config_file.clone());

    log::info!("config_dir: {}", &config_dir);
    log::info!("config_file: {}", &config_file);

    let config = if !std::path::Path::new(&config_file).exists() {
        let config = Config::new();
        let config_toml = toml::to_string(&config)?;
        std::fs::write(&config_file, config_toml)?;

        config
    } else {
        Config::from_config_file(&config_file)?
    };

    Ok((args, config))
}

/// Fills every option missing from the command line (or its environment variables) with the
/// value found in the config file.
pub fn merge_args_and_config(mut args: Args, config: Config) -> Args {
    if args.base_url.is_none() {
        args.base_url = config.base_url;
    }
    if args.runtime.is_none() {
        args.runtime = config.runtime;
    }
    if args.no_accelerator_env.is_none() {
        args.no_accelerator_env = config.no_accelerator_env;
    }
    if !args.quiet {
        args.quiet = config.quiet.unwrap_or_default();
    }
    if !args.no_color {
        args.no_color = config.no_color.unwrap_or_default();
    }
    if args.language.is_none() {
        args.language = config.language;
    }
    if args.theme.is_none() {
        args.theme = config.theme;
    }

    // The config model only applies when no model was given at all.
    if let Some(Command::Run(run)) = args.command.as_mut() {
        if run.model.is_none() && run.model_arg.is_none() {
            run.model = config.model;
        }
    }

    args
}

/// Builds the generation request from the `run` arguments, asking for whatever is missing.
///
/// The model is taken from `--model`, then the positional model, then asked interactively
/// until a non-empty name is given. When `--model` is used, every positional word is part of
/// the prompt.
///
/// The prompt is taken from `--prompt`, then the positional words, then `stdin` when it's
/// piped, and it's asked interactively otherwise.
pub fn resolve_request(run: RunArgs, input: &mut dyn PromptInput) -> Result<GenerationRequest> {
    let (model, words) = match run.model {
        Some(model) => (
            Some(model),
            run.model_arg
                .into_iter()
                .chain(run.prompt_words)
                .collect::<Vec<_>>(),
        ),
        None => (run.model_arg, run.prompt_words),
    };

    let mut model = model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    while model.is_none() {
        match input.ask("Enter the model name")? {
            Some(answer) if !answer.trim().is_empty() => model = Some(answer.trim().to_string()),
            Some(_) => continue,
            None => return Err(Error::InputClosed("model")),
        }
    }

    let prompt = if let Some(prompt) = run.prompt {
        prompt
    } else if !words.is_empty() {
        words.join(" ")
    } else if let Some(piped) = input.piped()? {
        piped
    } else {
        match input.ask("Enter your prompt")? {
            Some(prompt) => prompt,
            None => return Err(Error::InputClosed("prompt")),
        }
    };

    Ok(GenerationRequest::new(model.unwrap_or_default(), prompt)?)
}
