//! Session command handlers.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use pgdesk_core::{Console, CoreError, Credentials, RegisterProfile};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    console: &Console,
    args: AuthArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { email } => {
            let email = match email {
                Some(email) => email,
                None => prompt_line("Email")?,
            };
            let password = prompt_password()?;

            match console.login(Credentials { email, password }).await {
                Ok(true) => {
                    if !global.quiet {
                        eprintln!("Signed in");
                    }
                    Ok(())
                }
                Ok(false) => Err(CliError::Rejected {
                    reason: "email and password must not be blank".into(),
                }),
                Err(CoreError::AuthenticationFailed { message }) => {
                    Err(CliError::AuthFailed { message })
                }
                Err(e) => Err(e.into()),
            }
        }

        AuthCommand::Logout => {
            console.logout();
            if !global.quiet {
                eprintln!("Signed out");
            }
            Ok(())
        }

        AuthCommand::Register { name, email, phone } => {
            let password = prompt_password()?;

            match console
                .register(RegisterProfile {
                    name,
                    email,
                    phone,
                    password,
                })
                .await
            {
                Ok(true) => {
                    if !global.quiet {
                        eprintln!("Account registered");
                    }
                    Ok(())
                }
                Ok(false) => Err(CliError::Rejected {
                    reason: "name, email, and password must not be blank".into(),
                }),
                Err(CoreError::AuthenticationFailed { message }) => {
                    Err(CliError::AuthFailed { message })
                }
                Err(e) => Err(e.into()),
            }
        }

        AuthCommand::Status => {
            let session = console.store().session_snapshot();
            let color = output::should_color(&global.color);
            let line = if session.authenticated {
                let who = session.current_user.as_deref().unwrap_or("operator");
                if color {
                    format!("{} as {who}", "signed in".green())
                } else {
                    format!("signed in as {who}")
                }
            } else if color {
                "signed out".red().to_string()
            } else {
                "signed out".to_owned()
            };
            output::print_output(&line, global.quiet);
            Ok(())
        }
    }
}

/// Prompt for a password without echo, falling back to a plain stdin
/// read when piped.
fn prompt_password() -> Result<String, CliError> {
    if std::io::stdin().is_terminal() {
        Ok(rpassword::prompt_password("Password: ")?)
    } else {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

fn prompt_line(label: &str) -> Result<String, CliError> {
    if std::io::stdin().is_terminal() {
        dialoguer::Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))
    } else {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_owned())
    }
}
