//! Config command handlers. These run without a gateway connection.

use pgdesk_config::{Profile, config_path, load_config_or_default, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(pgdesk_config::ConfigError::Serialization)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::SetProfile {
            name,
            gateway,
            default,
        } => {
            // Reject junk before it lands in the file.
            gateway.parse::<url::Url>().map_err(|_| CliError::Validation {
                field: "gateway".into(),
                reason: format!("invalid URL: {gateway}"),
            })?;

            let mut cfg = load_config_or_default();
            cfg.profiles.insert(name.clone(), Profile::new(gateway));
            if default {
                cfg.default_profile = Some(name.clone());
            }
            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Profile '{name}' saved to {}", config_path().display());
            }
            Ok(())
        }
    }
}
