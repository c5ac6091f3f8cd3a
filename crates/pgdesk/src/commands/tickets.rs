//! Ticket command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use pgdesk_core::{Console, Ticket, TicketDraft, TicketPriority, TicketStatus};

use crate::cli::{GlobalOpts, TicketsArgs, TicketsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Ticket")]
    ticket_id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn to_row(t: &Ticket, color: bool) -> TicketRow {
    let status = if color {
        match t.status {
            TicketStatus::Open => t.status.label().red().to_string(),
            TicketStatus::InProgress => t.status.label().yellow().to_string(),
            TicketStatus::Closed => t.status.label().green().to_string(),
            TicketStatus::Unrecognized(_) => t.status.label().to_owned(),
        }
    } else {
        t.status.label().to_owned()
    };
    TicketRow {
        id: t.id,
        ticket_id: t.ticket_id.clone(),
        title: t.title.clone(),
        room: t.room.clone(),
        priority: t.priority.label().to_owned(),
        status,
    }
}

fn detail(t: &Ticket) -> String {
    let created = t
        .created_at
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "-".into());
    format!(
        "Ticket {tid}: {title}\n  Room:     {room}\n  Priority: {priority}\n  Status:   {status}\n  Raised:   {created}\n  {description}",
        tid = t.ticket_id,
        title = t.title,
        room = t.room,
        priority = t.priority.label(),
        status = t.status.label(),
        description = t.description,
    )
}

/// Parse the CLI spelling (`open`, `in-progress`, `closed`) into a
/// canonical status, rejecting anything the workflow doesn't know.
fn parse_status(raw: &str) -> Result<TicketStatus, CliError> {
    let status = TicketStatus::from_wire(&raw.replace('-', "_"));
    if let TicketStatus::Unrecognized(_) = status {
        return Err(CliError::Validation {
            field: "status".into(),
            reason: format!("expected 'open', 'in-progress', or 'closed', got '{raw}'"),
        });
    }
    Ok(status)
}

fn parse_priority(raw: &str) -> Result<TicketPriority, CliError> {
    let priority = TicketPriority::from_wire(raw);
    if let TicketPriority::Unrecognized(_) = priority {
        return Err(CliError::Validation {
            field: "priority".into(),
            reason: format!("expected 'low', 'medium', or 'high', got '{raw}'"),
        });
    }
    Ok(priority)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: TicketsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TicketsCommand::List(list) => {
            console.fetch_tickets(list.filter.as_deref()).await?;
            let state = console.store().tickets_snapshot();
            let color = matches!(global.output, crate::cli::OutputFormat::Table)
                && output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &state.items,
                |t| to_row(t, color),
                |t| t.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TicketsCommand::Get { id } => {
            let ticket = console.fetch_ticket(id).await?;
            let out = output::render_single(&global.output, &ticket, detail, |t| t.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TicketsCommand::Create {
            title,
            room,
            priority,
            description,
        } => {
            let created = console
                .create_ticket(TicketDraft {
                    title,
                    room,
                    priority: parse_priority(&priority)?,
                    description,
                })
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "ticket title must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Ticket '{}' raised", created.title);
            }
            Ok(())
        }

        TicketsCommand::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            let ticket = console.update_ticket_status(id, &status).await?;
            if !global.quiet {
                eprintln!("Ticket {} is now {}", ticket.ticket_id, ticket.status);
            }
            Ok(())
        }

        TicketsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete ticket {id}?"), global.yes)? {
                return Ok(());
            }
            console.delete_ticket(id).await?;
            if !global.quiet {
                eprintln!("Ticket {id} deleted");
            }
            Ok(())
        }
    }
}
