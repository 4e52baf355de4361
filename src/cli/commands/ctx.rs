//! ctx command - Show the current navigation state

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use kube::config::Kubeconfig;

use crate::core::context::Context;
use crate::core::navigation::{derive_state, NavigationState};
use crate::core::profile::read_kubeconfig;
use crate::ui::output::Printer;

/// Print the profile, group and control plane the kubeconfig points at.
pub fn current<W: Write>(
    ctx: &Context,
    kubeconfig: Option<&Path>,
    out: &mut Printer<W>,
) -> Result<()> {
    let kubeconfig = match kubeconfig {
        Some(path) => read_kubeconfig(path)?,
        None => Kubeconfig::read().context("failed to load kubeconfig")?,
    };

    let state = derive_state(ctx.config.profiles(), &kubeconfig);
    out.println(render_state(&state))?;
    Ok(())
}

/// One-line rendering of a navigation state.
pub fn render_state(state: &NavigationState) -> String {
    match state {
        NavigationState::Root => "no profile matches the current kubeconfig context".to_string(),
        other => other.to_string(),
    }
}
