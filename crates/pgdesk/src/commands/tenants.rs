//! Tenant command handlers.

use std::io::Write;

use tabled::Tabled;

use pgdesk_core::{Console, Tenant, TenantDraft};

use crate::cli::{GlobalOpts, TenantsArgs, TenantsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Tenant")]
    tenant_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Due")]
    due: String,
}

impl From<&Tenant> for TenantRow {
    fn from(t: &Tenant) -> Self {
        Self {
            id: t.id,
            tenant_id: t.tenant_id.clone(),
            name: t.name.clone(),
            phone: t.phone.clone(),
            room: t.room.clone(),
            check_in: t.check_in.to_string(),
            due: util::rupees(t.due),
        }
    }
}

fn detail(t: &Tenant) -> String {
    format!(
        "Tenant {tid} ({name})\n  Phone:    {phone}\n  Room:     {room}\n  Check-in: {check_in}\n  Due:      {due}",
        tid = t.tenant_id,
        name = t.name,
        phone = t.phone,
        room = t.room,
        check_in = t.check_in,
        due = util::rupees(t.due),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: TenantsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TenantsCommand::List(list) => {
            console.fetch_tenants(list.filter.as_deref()).await?;
            let state = console.store().tenants_snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |t| TenantRow::from(t),
                |t| t.tenant_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TenantsCommand::Get { id } => {
            let tenant = console.fetch_tenant(id).await?;
            let out =
                output::render_single(&global.output, &tenant, detail, |t| t.tenant_id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TenantsCommand::Create {
            tenant_id,
            name,
            phone,
            room,
            check_in,
            due,
        } => {
            let created = console
                .create_tenant(TenantDraft {
                    tenant_id,
                    name,
                    phone,
                    room,
                    check_in,
                    due,
                })
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "tenant name must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Tenant '{}' registered as {}", created.name, created.tenant_id);
            }
            Ok(())
        }

        TenantsCommand::Update {
            id,
            tenant_id,
            name,
            phone,
            room,
            check_in,
            due,
        } => {
            console
                .update_tenant(
                    id,
                    TenantDraft {
                        tenant_id,
                        name,
                        phone,
                        room,
                        check_in,
                        due,
                    },
                )
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "tenant name must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Tenant {id} updated");
            }
            Ok(())
        }

        TenantsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete tenant {id}?"), global.yes)? {
                return Ok(());
            }
            console.delete_tenant(id).await?;
            if !global.quiet {
                eprintln!("Tenant {id} deleted");
            }
            Ok(())
        }

        TenantsCommand::Export { filter, file } => {
            let bytes = console.export_tenants_csv(filter.as_deref()).await?;
            match file {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    if !global.quiet {
                        eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
                    }
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&bytes)?;
                }
            }
            Ok(())
        }
    }
}
