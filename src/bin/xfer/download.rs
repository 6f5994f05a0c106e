use mcc128::config::{RemoteConfig, REMOTE_CONFIG_PATH};
use mcc128::remote;

fn main() -> mcc128::Result<()> {
    env_logger::init();
    println!("You are going to download recorded samples from the device host.");
    if !remote::confirm("It may replace old files. Continue?")? {
        return Ok(());
    }
    let config = RemoteConfig::load(REMOTE_CONFIG_PATH)?;
    remote::download(&config)
}
