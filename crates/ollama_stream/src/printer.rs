use crossterm::style::Stylize;
use std::io::Write;

use crate::prelude::*;

/// How a line should look when colors are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Header,
    Success,
    Warning,
    Error,
}

/// Where the command handlers write their output.
pub trait OutputSink {
    /// Writes a single line of text.
    fn line(&mut self, text: &str, style: Style) -> Result<()>;

    /// Writes the final model response.
    fn response(&mut self, text: &str) -> Result<()>;

    /// Shows a progress indicator while waiting on the server.
    fn start_spinner(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn stop_spinner(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output sink backed by the process `stdout`.
pub struct Terminal {
    color: bool,
    spinner_enabled: bool,
    language: String,
    theme: String,
    spinner: Option<spinners::Spinner>,
}

impl Terminal {
    pub fn new(args: &Args) -> Self {
        let is_terminal = atty::is(atty::Stream::Stdout);

        Self {
            color: is_terminal && !args.no_color,
            spinner_enabled: is_terminal && !args.quiet,
            language: args
                .language
                .clone()
                .unwrap_or(DEFAULT_LANGUAGE.to_string()),
            theme: args.theme.clone().unwrap_or(DEFAULT_THEME.to_string()),
            spinner: None,
        }
    }

    /// Whether output is styled. Interactive prompts follow the same decision.
    pub fn is_colored(&self) -> bool {
        self.color
    }
}

impl OutputSink for Terminal {
    fn line(&mut self, text: &str, style: Style) -> Result<()> {
        let mut stdout = std::io::stdout();

        if !self.color {
            writeln!(stdout, "{text}")?;
            return Ok(());
        }

        match style {
            Style::Plain => writeln!(stdout, "{text}")?,
            Style::Header => writeln!(stdout, "{}", text.cyan().bold())?,
            Style::Success => writeln!(stdout, "{}", text.green().bold())?,
            Style::Warning => writeln!(stdout, "{}", text.yellow())?,
            Style::Error => writeln!(stdout, "{}", text.red())?,
        }

        Ok(())
    }

    fn response(&mut self, text: &str) -> Result<()> {
        if !self.color {
            println!("{text}");
            return Ok(());
        }

        bat::PrettyPrinter::new()
            .input_from_bytes(text.as_bytes())
            .language(&self.language)
            .theme(&self.theme)
            .print()?;

        println!();
        std::io::stdout().flush()?;

        Ok(())
    }

    fn start_spinner(&mut self, message: &str) -> Result<()> {
        if self.spinner_enabled && self.spinner.is_none() {
            self.spinner = Some(spinners::Spinner::new(
                spinners::Spinners::OrangeBluePulse,
                message.into(),
            ));
        }

        Ok(())
    }

    fn stop_spinner(&mut self) -> Result<()> {
        if let Some(mut sp) = self.spinner.take() {
            sp.stop();
            std::io::stdout().flush()?;
            crossterm::execute!(
                std::io::stdout(),
                crossterm::cursor::MoveToColumn(0),
                crossterm::terminal::Clear(crossterm::terminal::ClearType::CurrentLine)
            )?;
        }

        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Some(mut sp) = self.spinner.take() {
            sp.stop();
        }
    }
}
