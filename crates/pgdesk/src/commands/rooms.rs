//! Room command handlers.

use tabled::Tabled;

use pgdesk_core::{Console, Room, RoomDraft};

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    sharing_type: String,
    #[tabled(rename = "Beds")]
    beds: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            sharing_type: r.sharing_type.clone(),
            beds: format!("{}/{}", r.occupied, r.capacity),
            price: util::rupees(r.price),
            status: r.status.label().to_owned(),
        }
    }
}

fn detail(r: &Room) -> String {
    format!(
        "Room {id}: {name}\n  Type:     {sharing}\n  Beds:     {occ}/{cap}\n  Price:    {price}\n  Status:   {status}",
        id = r.id,
        name = r.name,
        sharing = r.sharing_type,
        occ = r.occupied,
        cap = r.capacity,
        price = util::rupees(r.price),
        status = r.status.label(),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: RoomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List(list) => {
            console.fetch_rooms(list.filter.as_deref()).await?;
            let state = console.store().rooms_snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |r| RoomRow::from(r),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::Get { id } => {
            let room = console.fetch_room(id).await?;
            let out = output::render_single(&global.output, &room, detail, |r| r.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::Create {
            name,
            sharing_type,
            capacity,
            occupied,
            price,
        } => {
            let created = console
                .create_room(RoomDraft {
                    name,
                    sharing_type,
                    capacity,
                    occupied,
                    price,
                })
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "room name must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Room '{}' created", created.name);
            }
            Ok(())
        }

        RoomsCommand::Update {
            id,
            name,
            sharing_type,
            capacity,
            occupied,
            price,
        } => {
            console
                .update_room(
                    id,
                    RoomDraft {
                        name,
                        sharing_type,
                        capacity,
                        occupied,
                        price,
                    },
                )
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "room name must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Room {id} updated");
            }
            Ok(())
        }

        RoomsCommand::Allocate { id } => {
            let room = console.allocate_room(id).await?;
            if !global.quiet {
                eprintln!(
                    "Allocated one bed in '{}' ({}/{} occupied)",
                    room.name, room.occupied, room.capacity
                );
            }
            Ok(())
        }

        RoomsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete room {id}?"), global.yes)? {
                return Ok(());
            }
            console.delete_room(id).await?;
            if !global.quiet {
                eprintln!("Room {id} deleted");
            }
            Ok(())
        }
    }
}
