//! passforge — A small, local random password generator.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Dispatching subcommands
//!
//! The generation algorithm lives in `generator.rs`, command
//! implementations in `commands/`, and clipboard helpers in `ui.rs`.

use clap::Parser;

mod cli;
mod commands;
mod generator;
mod ui;

fn main() {
    let cli = cli::Cli::parse();
    commands::dispatch(cli);
}
