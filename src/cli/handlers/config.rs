use std::path::Path;

use crate::cli::commands::{ConfigAction, ConfigCmd};
use crate::cli::output::{format_config, to_json};
use crate::io::config_io;

pub fn cmd_config(
    cmd: ConfigCmd,
    config_path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        ConfigAction::Show => {
            let config = config_io::load_config(config_path)?;
            if json {
                println!("{}", to_json(&config)?);
            } else {
                print!("{}", format_config(&config));
            }
        }
        ConfigAction::Set { key, value } => {
            let mut doc = config_io::read_config_doc(config_path)?;
            config_io::set_toggle(&mut doc, &key, value)?;
            config_io::write_config(config_path, &doc)?;
            tracing::info!(path = %config_path.display(), key = %key, value, "setting saved");
            if json {
                let config = config_io::load_config(config_path)?;
                println!("{}", to_json(&config)?);
            } else {
                println!("{} = {}", key, value);
            }
        }
    }
    Ok(())
}
