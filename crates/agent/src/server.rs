//! Line-delimited command loop.
//!
//! Reads one JSON command per line, dispatches it, writes one JSON response
//! per line. Lines that are not JSON are dropped without a response; every
//! other line gets exactly one.

use serde_json::Value;
use std::any::Any;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use toolrelay_core::{
    decode_line, Command, Config, Decoded, DispatchError, Registry, Response, Router,
};

/// Counters reported when the input stream closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub lines: usize,
    pub responses: usize,
    pub dropped: usize,
}

pub struct AgentServer {
    router: Router,
}

impl AgentServer {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Router::new(Registry::with_defaults(config)))
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Response for one input line, or `None` if the line is not JSON.
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        match decode_line(line) {
            None => {
                if !line.trim().is_empty() {
                    warn!(len = line.len(), "dropping undecodable line");
                }
                None
            }
            Some(Decoded::Invalid { id, error }) => {
                warn!(?id, %error, "rejecting malformed command");
                Some(Response::error(id, error.to_string()))
            }
            Some(Decoded::Command(command)) => Some(self.execute(&command)),
        }
    }

    /// Dispatch one command. Never panics and never fails; every outcome is a response.
    pub fn execute(&self, command: &Command) -> Response {
        let id = command.id.clone();
        match self.dispatch_isolated(command) {
            Ok(result) => {
                debug!(command = command.command_label(), "command succeeded");
                Response::success(id, result)
            }
            Err(e) => {
                warn!(command = command.command_label(), error = %e, "command failed");
                Response::error(id, e.to_string())
            }
        }
    }

    fn dispatch_isolated(&self, command: &Command) -> Result<Value, DispatchError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.router.dispatch(command)))
            .unwrap_or_else(|payload| Err(DispatchError::Panicked(panic_message(&*payload))))
    }

    /// Serve `input` until end of stream.
    ///
    /// Only I/O errors end the loop early: reading `input` or writing `output`.
    /// Lines that are not valid UTF-8 are dropped like any other undecodable line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> io::Result<LoopStats> {
        let mut stats = LoopStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            stats.lines += 1;

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "dropping non-UTF-8 line");
                    None
                }
            };

            match response {
                Some(response) => {
                    emit(output, &response)?;
                    stats.responses += 1;
                }
                None => stats.dropped += 1,
            }
        }

        Ok(stats)
    }
}

impl Default for AgentServer {
    fn default() -> Self {
        Self::new(Router::default())
    }
}

/// Write the readiness banner. Not part of the response protocol.
pub fn announce<W: Write>(output: &mut W, banner: &str) -> io::Result<()> {
    writeln!(output, "{}", banner)?;
    output.flush()
}

/// Write `response` as a single newline-terminated line and flush.
pub fn emit<W: Write>(output: &mut W, response: &Response) -> io::Result<()> {
    let mut line = response.encode();
    line.push('\n');
    output.write_all(line.as_bytes())?;
    output.flush()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
