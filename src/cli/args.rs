//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands and can also be set through
//! the environment. An explicit flag beats its variable; both beat the
//! selected profile's stored settings.
//!
//! | Flag                           | Variable                      |
//! |--------------------------------|-------------------------------|
//! | `--domain <URL>`               | `UP_DOMAIN`                   |
//! | `--profile <NAME>`             | `UP_PROFILE`                  |
//! | `--account` / `-a <NAME>`      | `UP_ACCOUNT`                  |
//! | `--insecure-skip-tls-verify[=BOOL]` | `UP_INSECURE_SKIP_TLS_VERIFY` |
//! | `--debug[=LEVEL]`              | `UP_DEBUG`                    |
//! | `--override-api-endpoint`      | `OVERRIDE_API_ENDPOINT`       |
//! | `--override-proxy-endpoint`    | `OVERRIDE_PROXY_ENDPOINT`     |
//! | `--override-registry-endpoint` | `OVERRIDE_REGISTRY_ENDPOINT`  |
//!
//! `--debug` and `--insecure-skip-tls-verify` take their value with `=`, so a
//! bare flag never swallows the following argument.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::core::context::Overlay;

/// up - manage control planes in the cloud and in self-hosted spaces
#[derive(Parser, Debug)]
#[command(name = "up")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Flags shared by all commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Root domain of the platform
    #[arg(long, global = true, env = "UP_DOMAIN", value_name = "URL")]
    pub domain: Option<Url>,

    /// Profile used to execute the command
    #[arg(long, global = true, env = "UP_PROFILE", value_name = "NAME")]
    pub profile: Option<String>,

    /// Account used to execute the command
    #[arg(short, long, global = true, env = "UP_ACCOUNT", value_name = "NAME")]
    pub account: Option<String>,

    /// [INSECURE] Skip verifying TLS certificates
    #[arg(
        long,
        global = true,
        env = "UP_INSECURE_SKIP_TLS_VERIFY",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub insecure_skip_tls_verify: Option<bool>,

    /// [INSECURE] Debug level; 1 logs requests, 2 adds headers, 3 adds curl commands
    #[arg(
        long,
        global = true,
        env = "UP_DEBUG",
        value_name = "LEVEL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "1"
    )]
    pub debug: Option<u8>,

    /// Override the default API endpoint
    #[arg(long, global = true, env = "OVERRIDE_API_ENDPOINT", value_name = "URL", hide = true)]
    pub override_api_endpoint: Option<Url>,

    /// Override the default proxy endpoint
    #[arg(long, global = true, env = "OVERRIDE_PROXY_ENDPOINT", value_name = "URL", hide = true)]
    pub override_proxy_endpoint: Option<Url>,

    /// Override the default registry endpoint
    #[arg(long, global = true, env = "OVERRIDE_REGISTRY_ENDPOINT", value_name = "URL", hide = true)]
    pub override_registry_endpoint: Option<Url>,
}

impl GlobalArgs {
    /// The flag layer for context resolution.
    pub fn overlay(&self) -> Overlay {
        Overlay {
            domain: self.domain.clone(),
            profile: self.profile.clone(),
            account: self.account.clone(),
            insecure_skip_tls_verify: self.insecure_skip_tls_verify,
            debug: self.debug,
            api_endpoint: self.override_api_endpoint.clone(),
            proxy_endpoint: self.override_proxy_endpoint.clone(),
            registry_endpoint: self.override_registry_endpoint.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage control planes
    #[command(name = "controlplane", visible_alias = "ctp")]
    ControlPlane {
        #[command(subcommand)]
        command: ControlPlaneCommand,
    },

    /// Manage organizations
    #[command(name = "organization", visible_alias = "org")]
    Organization {
        #[command(subcommand)]
        command: OrganizationCommand,
    },

    /// Inspect the current kubeconfig context
    Ctx {
        #[command(subcommand)]
        command: CtxCommand,
    },

    /// Inspect stored profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    eval \"$(up completion bash)\"

    # Zsh (add to ~/.zshrc)
    eval \"$(up completion zsh)\"

    # Fish
    up completion fish > ~/.config/fish/completions/up.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Whether the command still runs when `--profile` names a missing profile.
    pub fn allows_missing_profile(&self) -> bool {
        matches!(
            self,
            Command::Profile {
                command: ProfileCommand::List
            } | Command::Completion { .. }
        )
    }
}

/// Control plane subcommands.
#[derive(Subcommand, Debug)]
pub enum ControlPlaneCommand {
    /// Delete a control plane
    #[command(
        long_about = "Delete a control plane.\n\n\
            With a cloud profile the control plane is deleted from the current \
            account. With a space profile it is deleted from the space, in the \
            given group or in the namespace of the space kubeconfig's context. \
            Deleting a control plane that does not exist is not an error.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Delete from the current account
    up controlplane delete my-ctp

    # Delete from a group in a space
    up --profile disconnected controlplane delete my-ctp --group team-a"
    )]
    Delete {
        /// Name of the control plane
        name: String,

        /// Group of the control plane (space profiles only)
        #[arg(short, long)]
        group: Option<String>,
    },
}

/// Organization subcommands.
#[derive(Subcommand, Debug)]
pub enum OrganizationCommand {
    /// Delete an organization
    #[command(
        long_about = "Delete an organization.\n\n\
            Asks for confirmation unless --force is given. Deletion cannot be undone.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Delete after confirming
    up organization delete acme

    # Delete without asking
    up organization delete acme --force"
    )]
    Delete {
        /// Name of the organization
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Context subcommands.
#[derive(Subcommand, Debug)]
pub enum CtxCommand {
    /// Show the profile, group and control plane the kubeconfig points at
    Current {
        /// Kubeconfig to inspect (defaults to $KUBECONFIG or ~/.kube/config)
        #[arg(long, value_name = "PATH")]
        kubeconfig: Option<PathBuf>,
    },
}

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// List stored profiles
    List,

    /// Show the selected profile
    Current,
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
