use crate::Error;

/// The slice of the vendor library surface the rest of the crate calls into.
pub trait Driver {
    fn a_in_mode_write(&self, mode: u8) -> Result<(), Error>;
    fn a_in_range_write(&self, range: u8) -> Result<(), Error>;
    fn a_in_read(&self, channel: u8, options: u32) -> Result<f64, Error>;
}

#[cfg(all(target_os = "linux", feature = "hardware"))]
#[path = "linux.rs"]
pub mod imp;

#[cfg(not(all(target_os = "linux", feature = "hardware")))]
#[path = "stub.rs"]
pub mod imp;
