//! Rendering of admin API responses.
//!
//! The output mode is chosen once per invocation:
//! - raw JSON: the status line followed by the gateway body, untouched
//! - verbose text: the status line plus labeled identifier/summary lines
//! - terse text: just the identifier (one line per item for lists)
//!
//! Rendering never prints errors; those are returned to the CLI layer.

use crate::constants;
use crate::engine::descriptor::{Action, Descriptor};
use crate::engine::executor::Exchange;
use crate::error::Error;
use crate::resources::{NodeStatus, Page, Resource};
use serde::de::DeserializeOwned;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Status line and raw response body
    Json,
    /// Status line and labeled fields
    Verbose,
    /// Identifiers only
    #[default]
    Terse,
}

/// Output handler writing rendered responses to a sink (stdout by default).
#[derive(Debug)]
pub struct Output<W = io::Stdout> {
    mode: OutputMode,
    writer: W,
}

impl Output<io::Stdout> {
    #[must_use]
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout())
    }
}

impl<W: Write> Output<W> {
    pub const fn new(mode: OutputMode, writer: W) -> Self {
        Self { mode, writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders a single entity returned by add, query or update.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not a `R`, or
    /// [`Error::Output`] if writing fails.
    pub fn record<R: Resource>(&mut self, descriptor: &Descriptor, exchange: &Exchange) -> Result<(), Error> {
        if self.mode == OutputMode::Json {
            return self.raw(exchange);
        }

        let resource: R = decode(&exchange.body)?;
        if self.mode == OutputMode::Terse {
            writeln!(self.writer, "{}", resource.id())?;
            return Ok(());
        }

        let label = descriptor.kind.label();
        self.status_header(exchange)?;
        match descriptor.action {
            Action::Add => writeln!(self.writer, "new {label} ID: {}", resource.id())?,
            Action::Update => writeln!(self.writer, "updated {label} ID: {}", resource.id())?,
            Action::Query => {
                writeln!(self.writer, "{label} ID: {}", resource.id())?;
                writeln!(self.writer, "{label}: {}", resource.summary())?;
            }
            _ => writeln!(self.writer, "{label} ID: {}", resource.id())?,
        }
        Ok(())
    }

    /// Renders one page of a list response.
    ///
    /// An empty page prints a single `No {plural}` line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not a page of `R`, or
    /// [`Error::Output`] if writing fails.
    pub fn collection<R: Resource>(&mut self, descriptor: &Descriptor, exchange: &Exchange) -> Result<(), Error> {
        if self.mode == OutputMode::Json {
            return self.raw(exchange);
        }

        let page: Page<R> = decode(&exchange.body)?;
        let verbose = self.mode == OutputMode::Verbose;
        if verbose {
            self.status_header(exchange)?;
        }

        if page.data.is_empty() {
            writeln!(self.writer, "No {}", descriptor.kind.plural())?;
            return Ok(());
        }

        if verbose {
            writeln!(self.writer, "{} list", descriptor.kind.label())?;
        }
        for item in &page.data {
            writeln!(self.writer, "{}: {}", item.id(), item.summary())?;
        }
        if let Some(next) = page.next.as_deref().filter(|_| verbose) {
            writeln!(self.writer, "next page: {next}")?;
        }
        Ok(())
    }

    /// Renders a delete, which carries no response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if writing fails.
    pub fn deleted(&mut self, descriptor: &Descriptor, id: &str, exchange: &Exchange) -> Result<(), Error> {
        match self.mode {
            OutputMode::Json => self.raw(exchange),
            OutputMode::Terse => {
                writeln!(self.writer, "{id}")?;
                Ok(())
            }
            OutputMode::Verbose => {
                self.status_header(exchange)?;
                writeln!(self.writer, "deleted {} ID: {id}", descriptor.kind.label())?;
                Ok(())
            }
        }
    }

    /// Renders the admin API root status check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not a status document, or
    /// [`Error::Output`] if writing fails.
    pub fn status(&mut self, exchange: &Exchange) -> Result<(), Error> {
        if self.mode == OutputMode::Json {
            return self.raw(exchange);
        }

        let node: NodeStatus = decode(&exchange.body)?;
        if self.mode == OutputMode::Terse {
            writeln!(self.writer, "{}", exchange.status_line())?;
            return Ok(());
        }

        self.status_header(exchange)?;
        if let Some(version) = &node.version {
            writeln!(self.writer, "Kong version: {version}")?;
        }
        if let Some(hostname) = &node.hostname {
            writeln!(self.writer, "hostname: {hostname}")?;
        }
        Ok(())
    }

    fn raw(&mut self, exchange: &Exchange) -> Result<(), Error> {
        writeln!(self.writer, "{}", exchange.status_line())?;
        self.writer.write_all(&exchange.body)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn status_header(&mut self, exchange: &Exchange) -> Result<(), Error> {
        writeln!(
            self.writer,
            "{}: {}",
            constants::STATUS_LINE_LABEL,
            exchange.status_line()
        )?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(Error::Decode)
}
