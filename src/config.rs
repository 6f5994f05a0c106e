//! JSON configuration files shared with the device host.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::params::{AnalogInputMode, AnalogInputRange};
use crate::{Error, Result};

pub const SAMPLING_CONFIG_PATH: &str = "config.sampling.json";
pub const REMOTE_CONFIG_PATH: &str = "config.json";

fn load<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("loaded {}", path.display());
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutputSources {
    pub console: bool,
    pub csv: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamplingConfig {
    pub channels: Vec<u8>,
    /// Length of the acquisition window, in seconds.
    pub duration: f64,
    /// Delay between consecutive passes over the channels, in seconds.
    pub interval: f64,
    #[serde(default)]
    pub input_mode: AnalogInputMode,
    #[serde(default)]
    pub input_range: AnalogInputRange,
    pub output_sources: OutputSources,
}

impl SamplingConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<SamplingConfig> {
        load(path.as_ref())
    }

    /// Rejects out-of-range channel indices and nonsensical timing before
    /// any acquisition starts.
    pub fn validate(&self) -> Result<()> {
        let limit = self.input_mode.channel_count() - 1;
        for &channel in self.channels.iter() {
            if channel > limit {
                return Err(Error::InvalidChannel { channel, limit });
            }
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(Error::Other("sampling duration must be a non-negative number".into()));
        }
        if !self.interval.is_finite() || self.interval < 0.0 {
            return Err(Error::Other("sampling interval must be a non-negative number".into()));
        }
        Ok(())
    }
}

fn default_directory() -> String {
    "daqhat/".to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    pub user: String,
    pub host: String,
    /// Working directory on the device host, relative to the login directory.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl RemoteConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<RemoteConfig> {
        load(path.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLING_JSON: &str = r#"{
        "channels": [0, 1, 3],
        "duration": 5.0,
        "interval": 0.1,
        "output_sources": { "console": true, "csv": false }
    }"#;

    #[test]
    fn test_sampling_config_defaults() {
        let config: SamplingConfig = serde_json::from_str(SAMPLING_JSON).unwrap();
        assert_eq!(config.channels, vec![0, 1, 3]);
        assert_eq!(config.duration, 5.0);
        assert_eq!(config.interval, 0.1);
        assert_eq!(config.input_mode, AnalogInputMode::SingleEnded);
        assert_eq!(config.input_range, AnalogInputRange::Bip10V);
        assert!(config.output_sources.console);
        assert!(!config.output_sources.csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_channel_bounds() {
        let mut config: SamplingConfig = serde_json::from_str(SAMPLING_JSON).unwrap();
        config.channels = vec![0, 8];
        match config.validate() {
            Err(Error::InvalidChannel { channel: 8, limit: 7 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        // differential mode has half the channels
        config.channels = vec![4];
        config.input_mode = AnalogInputMode::Differential;
        match config.validate() {
            Err(Error::InvalidChannel { channel: 4, limit: 3 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_timing_bounds() {
        let mut config: SamplingConfig = serde_json::from_str(SAMPLING_JSON).unwrap();
        config.interval = -0.1;
        assert!(config.validate().is_err());
        config.interval = 0.0;
        assert!(config.validate().is_ok());
        config.duration = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_remote_config() {
        let config: RemoteConfig = serde_json::from_str(
            r#"{ "user": "pi", "host": "raspberrypi.local" }"#).unwrap();
        assert_eq!(config.user, "pi");
        assert_eq!(config.host, "raspberrypi.local");
        assert_eq!(config.directory, "daqhat/");
    }

    #[test]
    fn test_load_missing_file() {
        match SamplingConfig::load("does-not-exist.json") {
            Err(Error::Io(_)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
