//! Sample records and their CSV persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Directory the acquisition and visualization tools share.
pub const SAMPLES_DIR: &str = "samples";

/// One voltage reading. Serializes with the `date,channel,sample` header
/// the Python tooling on the device host expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Acquisition time as fractional epoch seconds.
    #[serde(rename = "date")]
    pub timestamp: f64,
    pub channel: u8,
    #[serde(rename = "sample")]
    pub value: f64,
}

/// Current time as fractional epoch seconds.
pub fn epoch_now() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) * 1e-6
}

/// Path of a new recording started at `start_time` (epoch seconds).
pub fn csv_path(start_time: f64) -> PathBuf {
    Path::new(SAMPLES_DIR).join(format!("voltage-{}.csv", start_time as i64))
}

pub fn write_csv(path: &Path, samples: &[Sample]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    log::debug!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

pub fn read_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut samples = Vec::new();
    for record in reader.deserialize() {
        samples.push(record?);
    }
    log::debug!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// All recordings under the samples directory, oldest first. A missing
/// directory is the same as an empty one.
pub fn list_recordings() -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(SAMPLES_DIR) {
        Ok(entries) => entries,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };
    let mut recordings = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            recordings.push(path);
        }
    }
    recordings.sort();
    Ok(recordings)
}

pub fn samples_per_channel(samples: &[Sample], channel_count: usize) -> usize {
    if channel_count == 0 {
        0
    } else {
        samples.len() / channel_count
    }
}
