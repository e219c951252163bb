//! Check command implementation.
//!
//! Scans each input file and reports whether it is lexically valid.

use std::io::{self, Write};
use std::path::PathBuf;

use loxc_lex::{Scanner, ScannerConfig};
use tracing::{debug, warn};

use crate::commands::common::read_source;
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{LoxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; `-` reads standard input.
    pub input: Vec<PathBuf>,
    /// Require keywords to end at an identifier boundary.
    pub strict_keywords: bool,
}

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files that scanned cleanly.
    pub passed: usize,
    /// Files that produced a diagnostic.
    pub failed: usize,
}

impl CheckReport {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Check every input, writing one report entry per file to `out`.
    ///
    /// Unlike `scan`, a lexical error does not stop the run; it is counted
    /// and the next file is checked. Unreadable files still abort.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<CheckReport> {
        let config = ScannerConfig::new().strict_keywords(self.args.strict_keywords);
        let mut report = CheckReport::default();

        for path in &self.args.input {
            let source = read_source(path)?;
            match Scanner::with_config(&source.text, config).scan() {
                Ok(tokens) => {
                    writeln!(out, "ok {} ({} tokens)", source.name, tokens.len())?;
                    report.passed += 1;
                },
                Err(err) => {
                    warn!(file = %source.name, line = err.line(), "lexical error");
                    writeln!(out, "{}: {}", source.name, err)?;
                    report.failed += 1;
                },
            }
        }

        if self.args.verbose {
            debug!(passed = report.passed, failed = report.failed, "check finished");
        }
        Ok(report)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        CheckCommand::new(args)
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = self.write_to(&mut out)?;
        out.flush()?;
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report whether Lox source files scan cleanly"
    }
}

/// Run the check command. Fails when any file has a lexical error.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = <CheckCommand as Command>::new(args);
    debug!(command = CheckCommand::name(), "{}", CheckCommand::description());
    let report = command.execute()?;
    if report.is_success() {
        Ok(())
    } else {
        Err(LoxtError::CheckFailed(report.failed))
    }
}
