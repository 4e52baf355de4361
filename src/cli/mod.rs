//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments, global flags and their environment variables
//! - Resolve the per-invocation [`Context`]
//! - Delegate to command handlers
//!
//! The CLI layer is thin. Precedence, endpoint derivation and client
//! construction live in [`crate::core`], [`crate::sdk`] and
//! [`crate::controlplane`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, GlobalArgs, Shell};

use anyhow::Result;

use crate::core::context::{Context, ResolveOptions};
use crate::logging;
use crate::ui::output::{Printer, Verbosity};
use crate::ui::prompts::StdinPrompter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let mut opts = ResolveOptions::new();
    if cli.command.allows_missing_profile() {
        opts = opts.allow_missing_profile();
    }

    let log = logging::init(cli.global.debug.unwrap_or(0));
    let ctx = Context::resolve(cli.global.overlay(), opts)?;
    log.set_level(ctx.debug_level);

    let mut out = Printer::stdout(Verbosity::from_flags(cli.quiet));
    let mut prompter = StdinPrompter;
    commands::dispatch(cli.command, &ctx, &mut prompter, &mut out)
}
