//! Command-line interface definitions for passforge.
//!
//! This module defines the public CLI surface of passforge using `clap`.
//! It contains no application logic and exists solely to describe how
//! users interact with the program from the terminal.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "passforge",
    version = "0.1",
    about = "A small, local random password generator",
    long_about = r#"
passforge generates random passwords from four character classes:
lowercase letters, uppercase letters, digits, and symbols.

All classes are enabled by default; exclusion flags turn individual
classes off. Each character is produced by first picking one of the
enabled classes at random and then picking a character from it, so
every enabled class contributes equally regardless of its size.

passforge does not use the network, stores nothing on disk, and keeps
no state between runs.

Typical usage:
  passforge gen
  passforge gen --length 20
  passforge gen --no-symbols --copy
"#,
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random password
    ///
    /// By default, generates a 32-character password using lowercase,
    /// uppercase, digits, and symbols. Excluding all four classes
    /// yields an empty result rather than an error.
    Gen {
        /// Length of the generated password
        #[arg(short, long, default_value_t = 32)]
        length: usize,

        /// Exclude lowercase characters (a–z)
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude uppercase characters (A–Z)
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude digits (0–9)
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols (e.g. !@#$%)
        #[arg(long)]
        no_symbols: bool,

        /// Copy the generated password to the clipboard for 10 seconds
        #[arg(short, long)]
        copy: bool,
    },
}
