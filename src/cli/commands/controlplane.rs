//! controlplane command - Delete a control plane

use std::io::Write;

use anyhow::{Context as _, Result};

use super::DeleteOutcome;
use crate::controlplane::{create_deleter, ControlPlaneDeleter};
use crate::core::context::Context;
use crate::core::profile::NamespacedName;
use crate::ui::output::Printer;

/// Delete control plane `name`.
///
/// For space profiles an empty `group` falls back to the namespace of the
/// space kubeconfig's current context.
pub fn delete<W: Write>(
    ctx: &Context,
    name: &str,
    group: Option<&str>,
    out: &mut Printer<W>,
) -> Result<DeleteOutcome> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(delete_async(ctx, name, group, out))
}

async fn delete_async<W: Write>(
    ctx: &Context,
    name: &str,
    group: Option<&str>,
    out: &mut Printer<W>,
) -> Result<DeleteOutcome> {
    let setup = create_deleter(ctx)
        .await
        .context("failed to set up control plane client")?;

    let group = group
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .or(setup.default_group)
        .unwrap_or_default();

    delete_with(setup.deleter.as_ref(), &NamespacedName::new(group, name), out).await
}

/// Delete `target` with `deleter`, reporting the outcome.
///
/// A control plane that does not exist is reported and is not an error.
pub async fn delete_with<W: Write>(
    deleter: &dyn ControlPlaneDeleter,
    target: &NamespacedName,
    out: &mut Printer<W>,
) -> Result<DeleteOutcome> {
    match deleter.delete(target).await {
        Ok(()) => {
            out.println(format!("{} deleted", target.name))?;
            Ok(DeleteOutcome::Deleted)
        }
        Err(e) if e.is_not_found() => {
            out.println(format!("Control plane {} not found", target.name))?;
            Ok(DeleteOutcome::NotFound)
        }
        Err(e) => Err(e).with_context(|| format!("failed to delete control plane {}", target)),
    }
}
