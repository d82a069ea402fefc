//! Queue Command Shell
//!
//! A line-oriented driver for the string queue. Scripts create and free a
//! queue, insert and remove strings, and check sizes and removed values;
//! any mismatch is reported as a failure so a script doubles as a test.
//!
//! ```rust
//! use strqueue::config::ShellConfig;
//! use strqueue::shell::Shell;
//!
//! let mut shell = Shell::new(ShellConfig::default(), Vec::new());
//! let summary = shell.run("new\nit b\nit a\nsort\nrh a\n".as_bytes()).unwrap();
//! assert!(summary.succeeded());
//! ```

pub mod command;
pub mod error;
pub mod session;

pub use command::Command;
pub use error::{ShellError, ShellResult};
pub use session::{Flow, SessionSummary, Shell};
