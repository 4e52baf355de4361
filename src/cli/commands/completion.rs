//! completion command - Generate shell completion scripts

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::args::{Cli, Shell};
use crate::ui::output::Printer;

/// Generate shell completion scripts.
///
/// Completions are written even in quiet mode.
pub fn completion<W: Write>(shell: Shell, out: &mut Printer<W>) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let buf = out.raw();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &name, buf),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &name, buf),
        Shell::Fish => generate(shells::Fish, &mut cmd, &name, buf),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, &name, buf),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::output::Verbosity;

    #[test]
    fn bash_completion_names_binary() {
        let mut out = Printer::new(Vec::new(), Verbosity::Quiet);
        completion(Shell::Bash, &mut out).unwrap();
        let script = String::from_utf8(out.into_inner()).unwrap();
        assert!(script.contains("_up"));
        assert!(script.contains("controlplane"));
    }
}
