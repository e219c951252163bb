//! Command modules for the loxt CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern:
//! an `Args` struct, a command type implementing [`traits::Command`], and a
//! `run_*` entry point called from `main`.

pub mod common;
pub mod traits;

pub mod check;
pub mod scan;

pub use check::{run_check, CheckArgs};
pub use scan::{run_scan, ScanArgs};
