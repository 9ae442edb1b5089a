use crossterm::style::Stylize;
use std::io::{BufRead, IsTerminal, Write};

/// Source of values the user didn't provide on the command line.
pub trait PromptInput {
    /// Asks the user for a value. Returns `None` once the input is closed.
    fn ask(&mut self, label: &str) -> std::io::Result<Option<String>>;

    /// Returns the content piped through `stdin`, if any.
    fn piped(&mut self) -> std::io::Result<Option<String>>;
}

/// Reads answers from the process `stdin`.
#[derive(Debug, Default)]
pub struct Stdin {
    color: bool,
}

impl Stdin {
    /// Creates a new `Stdin`. Labels are only styled when `color` is set.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn label(&self, label: &str) -> String {
        if self.color {
            format!("{} ", format!("{label}:").cyan().bold())
        } else {
            format!("{label}: ")
        }
    }
}

impl PromptInput for Stdin {
    fn ask(&mut self, label: &str) -> std::io::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", self.label(label))?;
        stdout.flush()?;

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        Ok(Some(answer.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn piped(&mut self) -> std::io::Result<Option<String>> {
        let stdin = std::io::stdin();

        if stdin.is_terminal() {
            return Ok(None);
        }

        let content = stdin
            .lock()
            .lines()
            .collect::<std::result::Result<Vec<String>, std::io::Error>>()?
            .join("\n");

        if content.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}
