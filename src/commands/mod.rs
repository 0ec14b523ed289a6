//! Command dispatch layer for passforge.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use crate::cli::{Cli, Commands};

pub mod gen;

pub fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Gen {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            copy,
        } => gen::run(
            length,
            !no_lowercase,
            !no_uppercase,
            !no_digits,
            !no_symbols,
            copy,
        ),
    }
}
