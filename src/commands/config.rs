use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long, help = "Write the effective configuration (defaults filled in) to the config file")]
    save: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let mut config = Config::read()?;
    let timeline = config.timeline_or_default();
    timeline
        .validate()
        .map_err(|e| msg_error_anyhow!(Message::InvalidTimelineConfig(e.to_string())))?;

    msg_info!(Message::ConfigPath(DataStorage::new().get_path(CONFIG_FILE_NAME)?.display().to_string()));
    println!("{}", serde_json::to_string_pretty(&timeline)?);

    if args.save {
        config.timeline = Some(timeline);
        config.save()?;
        msg_success!(Message::ConfigSaved);
    }

    Ok(())
}
