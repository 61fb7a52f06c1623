//! Registration of library-owned command line flags
//!
//! Libraries sometimes define flags of their own (log directories, verbosity, ...).
//! Instead of reading those from a process-wide flag set, the flags are collected in a
//! [`GlobalFlags`] value that a component passes in explicitly and picks from by name.
//!
//! ```
//! use apimeta::flags::{add_global_flags, GlobalFlags};
//! use clap::{Arg, ArgAction, Command};
//!
//! let log_dir = Arg::new("log_dir").long("log_dir").action(ArgAction::Set);
//! let globals = GlobalFlags::new().with_flag(log_dir);
//! let cmd = add_global_flags(Command::new("iam-apiserver"), "iam-apiserver");
//! let cmd = globals.register(cmd, "log_dir").unwrap();
//! let matches = cmd.try_get_matches_from(["iam-apiserver", "--log-dir", "/var/log"]).unwrap();
//! assert_eq!(matches.get_one::<String>("log-dir").map(String::as_str), Some("/var/log"));
//! ```
use std::collections::BTreeMap;

use clap::{Arg, ArgAction, Command};

use crate::error::{Error, Result};

/// Flag names use hyphens, never underscores
pub fn normalize(name: &str) -> String {
    name.replace('_', "-")
}

/// Add the flags every component should have to `cmd`
///
/// Currently only `-h/--help`, described as `help for <name>`.
pub fn add_global_flags(cmd: Command, name: &str) -> Command {
    cmd.disable_help_flag(true).arg(
        Arg::new("help")
            .short('h')
            .long("help")
            .action(ArgAction::Help)
            .help(format!("help for {name}")),
    )
}

/// Library-owned flags, keyed by the name they were defined with
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    flags: BTreeMap<String, Arg>,
}

impl GlobalFlags {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag, keyed by its id
    #[must_use]
    pub fn with_flag(mut self, arg: Arg) -> Self {
        self.flags.insert(arg.get_id().as_str().to_string(), arg);
        self
    }

    /// Find a flag by the name it was defined with
    pub fn lookup(&self, name: &str) -> Option<&Arg> {
        self.flags.get(name)
    }

    /// Add the flag defined as `global_name` to `cmd` under its normalized name
    ///
    /// Fails with [`Error::FlagNotFound`] if no such flag was defined.
    pub fn register(&self, cmd: Command, global_name: &str) -> Result<Command> {
        let arg = self
            .lookup(global_name)
            .ok_or_else(|| Error::FlagNotFound(global_name.to_string()))?;
        let name = normalize(global_name);
        tracing::debug!(flag = %name, command = %cmd.get_name(), "registering global flag");
        Ok(cmd.arg(arg.clone().id(name.clone()).long(name)))
    }
}
