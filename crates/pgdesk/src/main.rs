mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pgdesk_config::{FileCredentialStore, KeyringCredentialStore, profile_to_gateway_config};
use pgdesk_core::{Console, CredentialStore};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a gateway connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pgdesk", &mut std::io::stdout());
            Ok(())
        }

        // Everything else drives the console
        cmd => {
            let console = build_console(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &console, &cli.global).await
        }
    }
}

/// Build the `Console` from the config file, profile, and CLI overrides.
fn build_console(global: &cli::GlobalOpts) -> Result<Console, CliError> {
    let cfg = pgdesk_config::load_config_or_default();
    let (profile_name, mut profile) = cfg.resolve_profile(global.profile.as_deref())?;

    if let Some(ref gateway) = global.gateway {
        profile.gateway.clone_from(gateway);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    profile.timeout = Some(global.timeout);

    let gateway_config = profile_to_gateway_config(&profile, &cfg.defaults)?;
    let credentials = credential_store(&profile_name, global.no_keyring);

    Ok(Console::new(&gateway_config, credentials)?)
}

/// Pick the token store: platform keyring by default, plaintext file
/// when requested (headless hosts without a secret service).
fn credential_store(profile: &str, no_keyring: bool) -> Arc<dyn CredentialStore> {
    if no_keyring {
        Arc::new(FileCredentialStore::new(profile))
    } else {
        Arc::new(KeyringCredentialStore::new(profile))
    }
}
