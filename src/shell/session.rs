//! Shell Session
//!
//! Runs commands against a queue slot that starts out empty, the same way a
//! test driver would: every queue operation goes through the nullable handle
//! API, so commands issued after `free` (or before `new`) fail cleanly
//! instead of panicking.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::config::ShellConfig;
use crate::queue::{handle, StrQueue};
use crate::shell::command::{Command, USAGE};
use crate::shell::{ShellError, ShellResult};

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of running a whole script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failures: usize,
}

impl SessionSummary {
    pub fn succeeded(&self) -> bool {
        self.failures == 0
    }
}

/// A command session writing its output to `out`
pub struct Shell<W: Write> {
    queue: Option<StrQueue>,
    config: ShellConfig,
    out: W,
    summary: SessionSummary,
}

impl<W: Write> Shell<W> {
    pub fn new(config: ShellConfig, out: W) -> Self {
        Self {
            queue: None,
            config,
            out,
            summary: SessionSummary::default(),
        }
    }

    /// The queue currently held by the session, if any
    pub fn queue(&self) -> Option<&StrQueue> {
        self.queue.as_ref()
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Give back the output sink, destroying any remaining queue
    pub fn into_output(mut self) -> W {
        handle::destroy(self.queue.take());
        self.out
    }

    /// Read and run commands until end of input or `quit`
    ///
    /// Parse errors and failed commands are reported and counted; only I/O
    /// errors stop the session early.
    pub fn run<R: BufRead>(&mut self, input: R) -> ShellResult<SessionSummary> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match self.run_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_recoverable() => {
                    self.summary.failures += 1;
                    warn!("Line {}: {}", number + 1, e);
                    writeln!(self.out, "ERROR: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Session finished: {} commands, {} failures",
            self.summary.commands, self.summary.failures
        );
        Ok(self.summary.clone())
    }

    /// Parse and run a single line
    pub fn run_line(&mut self, line: &str) -> ShellResult<Flow> {
        let Some(command) = Command::parse_line(line)? else {
            return Ok(Flow::Continue);
        };

        if self.config.echo {
            writeln!(self.out, "cmd> {}", line.trim())?;
        }
        self.execute(&command)
    }

    /// Run one parsed command
    pub fn execute(&mut self, command: &Command) -> ShellResult<Flow> {
        debug!("Executing {:?}", command);
        self.summary.commands += 1;

        match command {
            Command::New => {
                handle::destroy(self.queue.take());
                self.queue = handle::create();
                if self.queue.is_none() {
                    return Err(ShellError::failed("Could not allocate a new queue"));
                }
            }
            Command::Free => {
                if self.queue.is_none() {
                    writeln!(self.out, "Freeing absent queue")?;
                }
                handle::destroy(self.queue.take());
            }
            Command::InsertHead { value, count } => {
                self.insert(value, *count, "head", handle::insert_head)?;
            }
            Command::InsertTail { value, count } => {
                self.insert(value, *count, "tail", handle::insert_tail)?;
            }
            Command::RemoveHead { expected } => self.remove_head(expected.as_deref())?,
            Command::RemoveHeadQuiet => {
                if !handle::remove_head(self.queue.as_mut(), None) {
                    return Err(self.remove_failure());
                }
            }
            Command::Size { expected } => {
                let size = handle::size(self.queue.as_ref());
                writeln!(self.out, "Queue size = {}", size)?;
                if let Some(expected) = expected {
                    if *expected != size {
                        return Err(ShellError::failed(format!(
                            "Computed queue size as {}, but expected {}",
                            size, expected
                        )));
                    }
                }
            }
            Command::Reverse => {
                self.require_queue("reverse")?;
                handle::reverse(self.queue.as_mut());
            }
            Command::Sort => {
                self.require_queue("sort")?;
                handle::sort(self.queue.as_mut());
            }
            Command::Show => self.show()?,
            Command::Stats => match &self.queue {
                Some(queue) => writeln!(self.out, "{}", queue.statistics().to_compact_format())?,
                None => writeln!(self.out, "q = NULL")?,
            },
            Command::Help => {
                for (usage, description) in USAGE {
                    writeln!(self.out, "  {:<12} | {}", usage, description)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        if command.is_mutating() {
            self.show()?;
        }
        Ok(Flow::Continue)
    }

    fn insert(
        &mut self,
        value: &str,
        count: usize,
        end: &str,
        op: fn(Option<&mut StrQueue>, &str) -> bool,
    ) -> ShellResult<()> {
        self.require_queue(&format!("insert {}", end))?;
        for i in 0..count {
            if !op(self.queue.as_mut(), value) {
                return Err(ShellError::failed(format!(
                    "Insertion of {} at {} failed after {} of {}",
                    value, end, i, count
                )));
            }
        }
        Ok(())
    }

    fn remove_head(&mut self, expected: Option<&str>) -> ShellResult<()> {
        let mut buf = vec![0u8; self.config.remove_buffer_size];
        if !handle::remove_head(self.queue.as_mut(), Some(&mut buf[..])) {
            return Err(self.remove_failure());
        }

        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let removed = String::from_utf8_lossy(&buf[..len]);
        writeln!(self.out, "Removed {} from queue", removed)?;

        match expected {
            Some(expected) if expected != removed => Err(ShellError::failed(format!(
                "Removed value {} does not match expected value {}",
                removed, expected
            ))),
            _ => Ok(()),
        }
    }

    fn remove_failure(&self) -> ShellError {
        if self.queue.is_none() {
            ShellError::failed("Calling remove head on null queue")
        } else {
            ShellError::failed("Calling remove head on empty queue")
        }
    }

    fn require_queue(&self, operation: &str) -> ShellResult<()> {
        if self.queue.is_none() {
            return Err(ShellError::failed(format!(
                "Calling {} on null queue",
                operation
            )));
        }
        Ok(())
    }

    fn show(&mut self) -> ShellResult<()> {
        let Some(queue) = &self.queue else {
            writeln!(self.out, "q = NULL")?;
            return Ok(());
        };

        let shown: Vec<&str> = queue.iter().take(self.config.show_limit).collect();
        let ellipsis = if queue.size() > shown.len() { " ..." } else { "" };
        writeln!(self.out, "q = [{}{}]", shown.join(" "), ellipsis)?;
        Ok(())
    }
}
