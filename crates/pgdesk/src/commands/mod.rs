//! Command handlers, one module per resource.

pub mod auth;
pub mod config_cmd;
pub mod notices;
pub mod rooms;
pub mod tenants;
pub mod tickets;
mod util;

use pgdesk_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    console: &Console,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Auth(args) => auth::handle(console, args, global).await,
        Command::Rooms(args) => rooms::handle(console, args, global).await,
        Command::Tenants(args) => tenants::handle(console, args, global).await,
        Command::Tickets(args) => tickets::handle(console, args, global).await,
        Command::Notices(args) => notices::handle(console, args, global).await,
        // Handled before a console is built
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
