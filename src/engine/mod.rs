pub mod invoker;
pub mod resolver;

use crate::Config;
use once_cell::sync::OnceCell;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// How long one engine invocation may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum EngineError {
    /// No usable engine on this host. Fatal: a scan cannot start without one.
    #[error("no spell engine found on PATH (tried {tried})")]
    NoEngine { tried: String },

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("i/o error talking to `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine wrote diagnostics to stderr; its stdout for this call is
    /// discarded rather than salvaged.
    #[error("`{program}` reported: {message}")]
    Diagnostics { program: String, message: String },

    #[error("`{program}` did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },
}

impl EngineError {
    /// Fatal errors abort the scan; everything else is isolated to the
    /// comment that triggered it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::NoEngine { .. })
    }
}

/// The narrow oracle seam: text in, unknown words out.
pub trait SpellEngine {
    fn check_text(&self, text: &str) -> Result<Vec<String>, EngineError>;
}

/// A fully resolved engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Drives the system spell checker as a subprocess.
///
/// Resolution happens on first use and the result is cached for the life of
/// this instance, so one checker can scan many files with one PATH lookup.
pub struct CommandEngine {
    program_override: Option<String>,
    extra_args: Vec<String>,
    timeout: Duration,
    resolved: OnceCell<EngineCommand>,
}

impl CommandEngine {
    pub fn new(config: &Config) -> Self {
        Self::from_parts(
            config.engine.clone(),
            config.engine_args.clone(),
            config.timeout(),
        )
    }

    pub fn from_parts(
        program_override: Option<String>,
        extra_args: Vec<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            program_override,
            extra_args,
            timeout,
            resolved: OnceCell::new(),
        }
    }

    /// The resolved command line: engine defaults first, caller extras after
    /// so they can override by repetition where the engine allows it.
    pub fn command(&self) -> Result<&EngineCommand, EngineError> {
        self.resolved.get_or_try_init(|| {
            let program = resolver::resolve_program(self.program_override.as_deref())?;
            let mut args = resolver::base_args(&program);
            args.extend(self.extra_args.iter().cloned());
            Ok(EngineCommand { program, args })
        })
    }
}

impl SpellEngine for CommandEngine {
    fn check_text(&self, text: &str) -> Result<Vec<String>, EngineError> {
        let command = self.command()?;
        invoker::run(command, text, self.timeout)
    }
}
