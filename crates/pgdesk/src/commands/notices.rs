//! Notice command handlers.

use tabled::Tabled;

use pgdesk_core::{Console, Notice, NoticeDraft};

use crate::cli::{GlobalOpts, NoticesArgs, NoticesCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NoticeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Posted")]
    date: String,
    #[tabled(rename = "Notice")]
    title: String,
}

impl From<&Notice> for NoticeRow {
    fn from(n: &Notice) -> Self {
        Self {
            id: n.notice_id.clone(),
            date: n.date.format("%Y-%m-%d %H:%M").to_string(),
            title: n.title.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: NoticesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NoticesCommand::List => {
            console.fetch_notices().await?;
            let state = console.store().notices_snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |n| NoticeRow::from(n),
                |n| n.notice_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NoticesCommand::Create { title } => {
            let created = console
                .create_notice(NoticeDraft { title })
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "notice text must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Notice posted as {}", created.notice_id);
            }
            Ok(())
        }

        NoticesCommand::Update { id, title } => {
            // Prime the cache so the original issue date survives the
            // merge; an uncached id would PUT a fresh one.
            console.fetch_notices().await?;
            console
                .update_notice(&id, &title)
                .await?
                .ok_or_else(|| CliError::Rejected {
                    reason: "notice text must not be blank".into(),
                })?;
            if !global.quiet {
                eprintln!("Notice {id} updated");
            }
            Ok(())
        }
    }
}
