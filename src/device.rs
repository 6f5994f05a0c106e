use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::config::SamplingConfig;
use crate::params::{AnalogInputMode, AnalogInputRange, OptionFlags};
use crate::sample::{self, Sample};
use crate::sys::Driver;
use crate::{Error, Result};

#[derive(Debug)]
pub struct Device<D: Driver> {
    driver: D,
    mode: AnalogInputMode,
}

impl Device<crate::sys::imp::HatDriverImpl> {
    /// Opens the first attached MCC 128 board.
    pub fn new() -> Result<Device<crate::sys::imp::HatDriverImpl>> {
        let driver = crate::sys::imp::HatDriverImpl::new()?;
        Ok(Device { driver, mode: AnalogInputMode::default() })
    }

    /// Runs `f` with an open device; the board is closed when `f` returns.
    pub fn with<T, F>(f: F) -> Result<T>
            where F: FnOnce(&mut Device<crate::sys::imp::HatDriverImpl>) -> Result<T> {
        let mut device = Device::new()?;
        f(&mut device)
    }
}

impl<D: Driver> Device<D> {
    pub fn configure(&mut self, mode: AnalogInputMode, range: AnalogInputRange) -> Result<()> {
        log::debug!("configure({:?}, {:?})", mode, range);
        self.driver.a_in_mode_write(mode.register_code())?;
        self.driver.a_in_range_write(range.register_code())?;
        self.mode = mode;
        Ok(())
    }

    pub fn check_channel(&self, channel: u8) -> Result<()> {
        let limit = self.mode.channel_count() - 1;
        if channel > limit {
            return Err(Error::InvalidChannel { channel, limit });
        }
        Ok(())
    }

    /// Reads a single scaled, calibrated value (unless `options` say
    /// otherwise) from `channel`.
    pub fn read_voltage(&mut self, channel: u8, options: OptionFlags) -> Result<f64> {
        self.check_channel(channel)?;
        let value = self.driver.a_in_read(channel, options.bits())?;
        log::trace!("a_in_read({}) = {:.7}", channel, value);
        Ok(value)
    }

    /// Software-timed acquisition: one reading per configured channel per
    /// pass, a fixed sleep between passes, bounded by the configured
    /// duration in wall-clock time. Stops early once `interrupted` is set.
    pub fn acquire(&mut self, config: &SamplingConfig, interrupted: &AtomicBool)
            -> Result<Vec<Sample>> {
        for &channel in config.channels.iter() {
            self.check_channel(channel)?;
        }
        if config.channels.is_empty() {
            log::warn!("no channels selected in config; nothing to acquire");
            return Ok(Vec::new());
        }
        let deadline = Instant::now() + Duration::from_secs_f64(config.duration);
        let mut samples = Vec::new();
        while Instant::now() < deadline && !interrupted.load(Ordering::Relaxed) {
            for &channel in config.channels.iter() {
                let value = self.read_voltage(channel, OptionFlags::empty())?;
                samples.push(Sample { timestamp: sample::epoch_now(), channel, value });
            }
            sleep(Duration::from_secs_f64(config.interval));
        }
        log::debug!("acquired {} samples ({} per channel)", samples.len(),
                    sample::samples_per_channel(&samples, config.channels.len()));
        Ok(samples)
    }
}
