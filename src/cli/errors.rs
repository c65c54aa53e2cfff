//! Error display formatting for the CLI.

use crate::constants;
use crate::error::Error;
use tracing::debug;

/// One-line form printed on stderr: `{kind}: {message}`.
#[must_use]
pub fn format_error(error: &Error) -> String {
    format!("{}: {error}", error.kind())
}

/// Prints the error line. A hint, when one applies, is only logged.
pub fn print_error(error: &Error) {
    // ast-grep-ignore: no-println
    eprintln!("{}", format_error(error));
    if let Some(hint) = hint(error) {
        debug!(target: "kconf::cli", "Hint: {hint}");
    }
}

const fn hint(error: &Error) -> Option<&'static str> {
    match error {
        Error::Transport(_) => Some(constants::ERR_CONNECTION),
        Error::NotFound { .. } => Some(constants::ERR_NOT_FOUND),
        Error::Decode(_) => Some(constants::ERR_JSON_SYNTAX),
        _ => None,
    }
}
