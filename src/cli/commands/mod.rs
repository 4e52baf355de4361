//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds the client it needs from the resolved [`Context`]
//! 2. Makes a single delegated call
//! 3. Prints one result line
//!
//! # Async Commands
//!
//! Commands that talk to an API are async. Their sync entry points create a
//! tokio runtime and `block_on` the async implementation, which tests call
//! directly with a mock or a wiremock-backed client.

mod completion;
mod controlplane;
mod ctx;
mod organization;
mod profile;

use std::io::Write;

use anyhow::Result;

use super::args::{Command, ControlPlaneCommand, CtxCommand, OrganizationCommand, ProfileCommand};
use crate::core::context::Context;
use crate::ui::output::Printer;
use crate::ui::prompts::Prompter;

/// Result of a delete command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The target did not exist; nothing was deleted
    NotFound,
}

/// Dispatch a parsed command to its handler.
pub fn dispatch<W: Write>(
    command: Command,
    ctx: &Context,
    prompter: &mut dyn Prompter,
    out: &mut Printer<W>,
) -> Result<()> {
    match command {
        Command::ControlPlane {
            command: ControlPlaneCommand::Delete { name, group },
        } => controlplane::delete(ctx, &name, group.as_deref(), out).map(|_| ()),
        Command::Organization {
            command: OrganizationCommand::Delete { name, force },
        } => organization::delete(ctx, &name, force, prompter, out).map(|_| ()),
        Command::Ctx {
            command: CtxCommand::Current { kubeconfig },
        } => ctx::current(ctx, kubeconfig.as_deref(), out),
        Command::Profile { command } => match command {
            ProfileCommand::List => profile::list(ctx, out),
            ProfileCommand::Current => profile::current(ctx, out),
        },
        Command::Completion { shell } => completion::completion(shell, out),
    }
}
