//! organization command - Delete an organization

use std::io::Write;

use anyhow::{Context as _, Result};

use super::DeleteOutcome;
use crate::core::context::Context;
use crate::sdk::{OrganizationsClient, SdkError};
use crate::ui::output::Printer;
use crate::ui::prompts::{confirm, Prompter};

/// Question asked before deleting.
pub const CONFIRM_PROMPT: &str = "Are you sure you want to delete this organization?";

/// Delete organization `name`, asking first unless `force` is set.
///
/// Declining fails with "operation canceled" before any request is made.
pub fn delete<W: Write>(
    ctx: &Context,
    name: &str,
    force: bool,
    prompter: &mut dyn Prompter,
    out: &mut Printer<W>,
) -> Result<DeleteOutcome> {
    if !force {
        confirm(prompter, CONFIRM_PROMPT)?;
        out.println(format!(
            "Deleting organization {}. This cannot be undone.",
            name
        ))?;
    }

    let client = OrganizationsClient::new(
        ctx.client_config()
            .context("failed to set up organizations client")?,
    );
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(delete_async(&client, name, out))
}

/// Resolve `name` to its id and delete it.
pub async fn delete_async<W: Write>(
    client: &OrganizationsClient,
    name: &str,
    out: &mut Printer<W>,
) -> Result<DeleteOutcome> {
    let result = match client.get_org_id(name).await {
        Ok(id) => client.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            out.println(format!("{} deleted", name))?;
            Ok(DeleteOutcome::Deleted)
        }
        Err(SdkError::NotFound(_)) => {
            out.println(format!("Organization {} not found", name))?;
            Ok(DeleteOutcome::NotFound)
        }
        Err(e) => Err(e).with_context(|| format!("failed to delete organization {}", name)),
    }
}
