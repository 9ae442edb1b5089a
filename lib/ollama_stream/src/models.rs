use duct::cmd;

use crate::error::Error;

/// Default binary used to list the installed models.
pub const DEFAULT_RUNTIME: &str = "ollama";

/// Lists the installed models by running `<runtime> list`.
///
/// The output is returned verbatim, it's never parsed.
pub fn list_models(runtime: &str) -> Result<String, Error> {
    log::info!("running: {runtime} list");

    let output = match cmd(runtime, ["list"])
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::RuntimeNotFound(runtime.to_string()))
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if !output.status.success() {
        log::debug!("{runtime} list exited with {}", output.status);
        return Err(Error::ListFailed(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
