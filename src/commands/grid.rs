//! Renders the day grid: one row per work shift, one column per slot and a
//! closing row with the number of staff present.

use super::DayArgs;
use crate::libs::formatter::format_range;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_debug, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct GridArgs {
    #[command(flatten)]
    day: DayArgs,
    #[arg(long, help = "Also list the break bars of every row")]
    with_breaks: bool,
}

pub fn cmd(args: GridArgs) -> Result<()> {
    let timeline = args.day.load_timeline()?;
    let date = timeline.date().format("%Y-%m-%d").to_string();

    msg_debug!(Message::ShiftRowsCount(timeline.items().len()));
    if timeline.items().is_empty() {
        msg_warning!(Message::NoShiftsForDate(date.clone()));
    }

    msg_print!(
        Message::GridHeader {
            date,
            range: format_range(&timeline.grid().range()),
            interval: timeline.grid().interval().minutes(),
        },
        true
    );
    View::grid(&timeline)?;

    if args.with_breaks {
        msg_info!(Message::BreaksMergedCount(timeline.merged_breaks().len()), true);
        View::breaks(&timeline)?;
    }

    Ok(())
}
