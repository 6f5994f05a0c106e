use std::path::Path;

use mcc128::config::{RemoteConfig, REMOTE_CONFIG_PATH, SAMPLING_CONFIG_PATH};
use mcc128::remote;

fn main() -> mcc128::Result<()> {
    env_logger::init();
    println!("You are going to upload the sampling config to the device host.");
    if !remote::confirm("It may replace old files. Continue?")? {
        return Ok(());
    }
    let config = RemoteConfig::load(REMOTE_CONFIG_PATH)?;
    remote::upload(&config, &[Path::new(SAMPLING_CONFIG_PATH)])
}
