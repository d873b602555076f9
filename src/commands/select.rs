//! Replays a two-click break selection on one shift row and prints the
//! break-creation request it produces.

use super::DayArgs;
use crate::libs::day::{TimelineEvent, TimelineOutput};
use crate::libs::messages::Message;
use crate::libs::selection::SelectionState;
use crate::{msg_bail_anyhow, msg_debug, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    day: DayArgs,
    #[arg(long, short, help = "Shift id of the row")]
    row: i64,
    #[arg(long, help = "Slot index of the first click")]
    from: usize,
    #[arg(long, help = "Slot index of the second click")]
    to: usize,
}

pub fn cmd(args: SelectArgs) -> Result<()> {
    let mut timeline = args.day.load_timeline()?;

    if timeline.handle(TimelineEvent::RowClicked(args.row)).is_none() {
        msg_bail_anyhow!(Message::RowNotFound(args.row));
    }

    timeline.handle(TimelineEvent::SlotClicked {
        row_id: args.row,
        index: args.from,
    });
    match timeline.selection().state() {
        SelectionState::Armed { row_id, start_index } => msg_debug!(Message::SelectionArmed { row_id, index: start_index }),
        SelectionState::Idle => {
            msg_warning!(Message::SelectionIgnored {
                row_id: args.row,
                index: args.from,
            });
            msg_bail_anyhow!(Message::SelectionIncomplete);
        }
    }

    timeline.handle(TimelineEvent::SlotHovered {
        row_id: args.row,
        index: args.to,
    });

    match timeline.handle(TimelineEvent::SlotClicked {
        row_id: args.row,
        index: args.to,
    }) {
        Some(TimelineOutput::CreateBreak(request)) => {
            msg_success!(Message::BreakRequestCreated {
                row_id: request.shift_detail_id,
                start: request.start_time.clone(),
                end: request.end_time.clone(),
            });
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        _ => {
            msg_warning!(Message::SelectionIgnored {
                row_id: args.row,
                index: args.to,
            });
            msg_bail_anyhow!(Message::SelectionIncomplete);
        }
    }
}
