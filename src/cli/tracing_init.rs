//! Tracing/logging initialization for the CLI.

use crate::constants;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to text with a warning.
    fn from_env(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            None | Some("text") => Self::Text,
            Some("json") => Self::Json,
            Some(other) => {
                // Tracing is not yet initialized; eprintln! is the only output channel available.
                // ast-grep-ignore: no-println
                eprintln!(
                    "Warning: Unrecognized {} '{other}'. Valid values: 'json', 'text'. Using 'text'.",
                    constants::ENV_KCONF_LOG_FORMAT
                );
                Self::Text
            }
        }
    }
}

/// Log sink: an append-mode file when `KCONF_LOG_FILE` opens, stderr otherwise.
struct LogSink {
    file: Option<Mutex<File>>,
}

impl LogSink {
    fn from_env(path: Option<String>) -> Self {
        let file = path.and_then(|path| {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => Some(Mutex::new(file)),
                Err(e) => {
                    // ast-grep-ignore: no-println
                    eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
                    None
                }
            }
        });
        Self { file }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = Box<dyn Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.file
            .as_ref()
            .and_then(|mutex| mutex.lock().ok())
            .and_then(|file| file.try_clone().ok())
            .map_or_else(
                || Box::new(io::stderr()) as Self::Writer,
                |cloned| Box::new(cloned) as Self::Writer,
            )
    }
}

/// Filter directive for a `-d` count, falling back to `KCONF_LOG`.
fn filter_directive(verbosity: u8, env: Option<String>) -> String {
    match verbosity {
        0 => env.unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing-subscriber for request/response logging.
///
/// `-d` selects debug and `-dd` trace; otherwise the filter comes from
/// `KCONF_LOG` and defaults to `error`. Events never reach stdout.
pub fn init_tracing(verbosity: u8) {
    let directive = filter_directive(verbosity, std::env::var(constants::ENV_KCONF_LOG).ok());
    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let format = LogFormat::from_env(std::env::var(constants::ENV_KCONF_LOG_FORMAT).ok().as_deref());
    let sink = LogSink::from_env(std::env::var(constants::ENV_KCONF_LOG_FILE).ok());

    match format {
        LogFormat::Json => {
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_span_list(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(sink);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .init();
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_writer(sink);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .init();
        }
    }
}
