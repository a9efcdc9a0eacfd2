// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log level, output format, and destination for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracing subscriber setup
//!
//! Library code only emits `tracing` events. Binaries call
//! `LoggingConfig::from_env().init()` once; the CLI routes logs to stderr so
//! that `--json` output on stdout stays clean.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Service name reported at startup
pub const SERVICE_NAME: &str = "macrofit";

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string such as `info` or `macrofit=debug`
    pub level: String,
    pub format: LogFormat,
    /// Add file and line to each event
    pub include_location: bool,
    /// Add thread id and name to each event
    pub include_thread: bool,
    /// Emit span open and close events, useful for timing LLM calls
    pub include_spans: bool,
    /// Where log lines are written
    pub writer: LogWriter,
    /// Reported in the startup event
    pub service_name: String,
    /// Reported in the startup event
    pub service_version: String,
    /// `production` turns on every detail flag
    pub environment: String,
}

/// Event rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One `JSON` object per line
    Json,
    /// Multi-line, for terminals
    Pretty,
    /// One line per event, no target
    Compact,
}

/// Log destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWriter {
    /// Standard output
    Stdout,
    /// Standard error, leaving stdout for command output
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            writer: LogWriter::Stdout,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Settings from the process environment
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, `LOG_INCLUDE_SPANS`, `SERVICE_NAME`, and
    /// `SERVICE_VERSION`.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let verbose = environment == "production";
        let flag = |name: &str| verbose || env::var(name).is_ok();

        Self {
            level,
            format,
            include_location: flag("LOG_INCLUDE_LOCATION"),
            include_thread: flag("LOG_INCLUDE_THREAD"),
            include_spans: flag("LOG_INCLUDE_SPANS"),
            writer: LogWriter::Stdout,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Send log lines to stderr instead of stdout
    #[must_use]
    pub const fn with_stderr(mut self) -> Self {
        self.writer = LogWriter::Stderr;
        self
    }

    /// Override the log level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Level filter with the HTTP stack held at warn
    fn env_filter(&self) -> EnvFilter {
        let directive = |text: &str, fallback: Level| -> Directive {
            text.parse().unwrap_or_else(|_| fallback.into())
        };

        EnvFilter::new(&self.level)
            .add_directive(directive("hyper=warn", Level::WARN))
            .add_directive(directive("hyper_util=warn", Level::WARN))
            .add_directive(directive("reqwest=warn", Level::WARN))
            .add_directive(directive("rustls=warn", Level::WARN))
    }

    /// Install the subscriber for the whole process
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match (self.format, self.writer) {
            (LogFormat::Json, LogWriter::Stdout) => registry
                .with(self.detailed_layer().with_span_events(span_events).json())
                .try_init(),
            (LogFormat::Json, LogWriter::Stderr) => registry
                .with(
                    self.detailed_layer()
                        .with_writer(io::stderr)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            (LogFormat::Pretty, LogWriter::Stdout) => registry
                .with(self.detailed_layer().with_span_events(span_events))
                .try_init(),
            (LogFormat::Pretty, LogWriter::Stderr) => registry
                .with(
                    self.detailed_layer()
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            (LogFormat::Compact, LogWriter::Stdout) => registry
                .with(fmt::layer().compact().with_target(false))
                .try_init(),
            (LogFormat::Compact, LogWriter::Stderr) => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn detailed_layer<S>(&self) -> fmt::Layer<S> {
        fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_target(true)
    }

    /// Startup event with the effective settings
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "MacroFit starting up"
        );
    }
}
