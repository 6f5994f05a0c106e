use crate::{Error, Result};

/// Placeholder for builds without the vendor library (non-Linux targets or
/// `--no-default-features`). Always reports the board as absent.
#[derive(Debug)]
pub struct HatDriverImpl;

impl HatDriverImpl {
    pub fn new() -> Result<HatDriverImpl> {
        Err(Error::NotFound)
    }
}

impl super::Driver for HatDriverImpl {
    fn a_in_mode_write(&self, _mode: u8) -> Result<()> {
        unimplemented!()
    }

    fn a_in_range_write(&self, _range: u8) -> Result<()> {
        unimplemented!()
    }

    fn a_in_read(&self, _channel: u8, _options: u32) -> Result<f64> {
        unimplemented!()
    }
}
