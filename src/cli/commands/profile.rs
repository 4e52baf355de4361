//! profile command - Inspect stored profiles

use std::io::Write;

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::core::config::Profile;
use crate::core::context::Context;
use crate::ui::output::Printer;

const REDACTED: &str = "REDACTED";

/// List profiles, marking the selected one with `*`.
pub fn list<W: Write>(ctx: &Context, out: &mut Printer<W>) -> Result<()> {
    let profiles: Vec<(&str, &Profile)> = ctx.config.profiles().collect();
    if profiles.is_empty() {
        out.println("no profiles found")?;
        return Ok(());
    }

    let width = profiles
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    out.println(format!("  {:<width$}  {:<5}  ACCOUNT", "NAME", "TYPE", width = width))?;
    for (name, profile) in profiles {
        let marker = if name == ctx.profile_name { '*' } else { ' ' };
        out.println(format!(
            "{} {:<width$}  {:<5}  {}",
            marker,
            name,
            profile.kind.to_string(),
            profile.account,
            width = width
        ))?;
    }
    Ok(())
}

/// Print the selected profile as JSON with its session redacted.
pub fn current<W: Write>(ctx: &Context, out: &mut Printer<W>) -> Result<()> {
    if ctx.profile_name.is_empty() {
        return Err(anyhow!(
            "no profile selected; set a default profile or pass --profile"
        ));
    }

    let mut profile = ctx.profile.clone();
    if profile.session.is_some() {
        profile.session = Some(REDACTED.to_string());
    }

    let doc = json!({
        "name": ctx.profile_name,
        "profile": profile,
        "account": ctx.account,
        "domain": ctx.domain.as_str(),
    });
    out.println(serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
