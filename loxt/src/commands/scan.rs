//! Scan command implementation.
//!
//! Scans each input file and prints its tokens as text lines or JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use loxc_lex::{Scanner, ScannerConfig};
use tracing::{debug, info};

use crate::commands::common::{read_source, write_token_line, OutputFormat, TokenRecord};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{LoxtError, Result};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; `-` reads standard input.
    pub input: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Require keywords to end at an identifier boundary.
    pub strict_keywords: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            input: Vec::new(),
            format: OutputFormat::Text,
            strict_keywords: false,
        }
    }
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new ScanCommand.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    /// Scanner options derived from the arguments.
    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new().strict_keywords(self.args.strict_keywords)
    }

    /// Scan every input and write the listings to `out`.
    ///
    /// Stops at the first file that fails to scan. Returns the total number
    /// of tokens written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut total = 0;
        for path in &self.args.input {
            let source = read_source(path)?;
            debug!(file = %source.name, chars = source.text.chars().count(), "scanning");

            let tokens = Scanner::with_config(&source.text, self.scanner_config())
                .scan()
                .map_err(|source_err| LoxtError::Scan {
                    path: source.name.clone(),
                    source: source_err,
                })?;

            match self.args.format {
                OutputFormat::Text => {
                    for token in &tokens {
                        write_token_line(out, token)?;
                    }
                },
                OutputFormat::Json => {
                    let records: Vec<TokenRecord<'_>> =
                        tokens.iter().map(TokenRecord::from).collect();
                    serde_json::to_writer_pretty(&mut *out, &records)?;
                    writeln!(out)?;
                },
            }

            if self.args.verbose {
                info!(file = %source.name, tokens = tokens.len(), "scanned");
            }
            total += tokens.len();
        }
        Ok(total)
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        ScanCommand::new(args)
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let total = self.write_to(&mut out)?;
        out.flush()?;
        Ok(total)
    }

    fn name() -> &'static str {
        "scan"
    }
}

impl CommandDescription for ScanCommand {
    fn description() -> &'static str {
        "Print the tokens of Lox source files"
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs) -> Result<usize> {
    let command = <ScanCommand as Command>::new(args);
    debug!(command = ScanCommand::name(), "{}", ScanCommand::description());
    command.execute()
}
