//! File transfer to and from the device host, delegated to `scp`.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::config::RemoteConfig;
use crate::sample::SAMPLES_DIR;
use crate::{Error, Result};

// the device host runs a stock sshd
const SCP_PORT: &str = "22";

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks a yes/no question on the terminal; an empty answer means yes.
pub fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("{} [Y/n] ", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false); // EOF
        }
        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer 'y' or 'n'."),
        }
    }
}

fn target(config: &RemoteConfig, path: &str) -> String {
    format!("{}@{}:{}{}", config.user, config.host, config.directory, path)
}

fn run(mut command: Command) -> Result<()> {
    log::debug!("running {:?}", command);
    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Remote(format!("scp exited with {}", status)))
    }
}

/// Copies local files into the working directory on the device host.
pub fn upload(config: &RemoteConfig, paths: &[&Path]) -> Result<()> {
    let mut command = Command::new("scp");
    command.arg("-P").arg(SCP_PORT);
    for path in paths {
        command.arg(path);
    }
    command.arg(target(config, ""));
    run(command)
}

/// Recursively copies the samples directory from the device host into
/// the current directory.
pub fn download(config: &RemoteConfig) -> Result<()> {
    let mut command = Command::new("scp");
    command.arg("-r").arg("-P").arg(SCP_PORT);
    command.arg(target(config, SAMPLES_DIR));
    command.arg(".");
    run(command)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("\n"), Some(true));
        assert_eq!(parse_answer("y\n"), Some(true));
        assert_eq!(parse_answer("YES\n"), Some(true));
        assert_eq!(parse_answer("n\n"), Some(false));
        assert_eq!(parse_answer(" No \n"), Some(false));
        assert_eq!(parse_answer("maybe\n"), None);
    }

    #[test]
    fn test_target() {
        let config = RemoteConfig {
            user: "pi".into(),
            host: "raspberrypi.local".into(),
            directory: "daqhat/".into(),
        };
        assert_eq!(target(&config, ""), "pi@raspberrypi.local:daqhat/");
        assert_eq!(target(&config, "samples"), "pi@raspberrypi.local:daqhat/samples");
    }
}
