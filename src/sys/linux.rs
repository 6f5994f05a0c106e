use std::ffi::CStr;
use std::ptr;

use libc::{c_char, c_double, c_int};
use libloading::Library;
use libloading::os::unix::Symbol;

use crate::{Error, Result};

// SONAME installed by the vendor's daqhats package on Raspberry Pi OS.
const LIBRARY_NAME: &str = "libdaqhats.so.1";

const HAT_ID_MCC_128: u16 = 0x0146;
const RESULT_SUCCESS: c_int = 0;

/// Board descriptor filled in by `hat_list()`.
#[repr(C)]
struct HatInfo {
    address: u8,
    id: u16,
    version: u16,
    product_name: [c_char; 256],
}

type HatListFn = unsafe extern "C" fn(filter_id: u16, list: *mut HatInfo) -> c_int;
type OpenFn = unsafe extern "C" fn(address: u8) -> c_int;
type CloseFn = unsafe extern "C" fn(address: u8) -> c_int;
type ModeWriteFn = unsafe extern "C" fn(address: u8, mode: u8) -> c_int;
type RangeWriteFn = unsafe extern "C" fn(address: u8, range: u8) -> c_int;
type AInReadFn =
    unsafe extern "C" fn(address: u8, channel: u8, options: u32, value: *mut c_double) -> c_int;

struct Api {
    hat_list: Symbol<HatListFn>,
    open: Symbol<OpenFn>,
    close: Symbol<CloseFn>,
    a_in_mode_write: Symbol<ModeWriteFn>,
    a_in_range_write: Symbol<RangeWriteFn>,
    a_in_read: Symbol<AInReadFn>,
}

impl Api {
    fn resolve(library: &Library) -> Result<Api> {
        unsafe {
            Ok(Api {
                hat_list: library.get::<HatListFn>(b"hat_list\0")?.into_raw(),
                open: library.get::<OpenFn>(b"mcc128_open\0")?.into_raw(),
                close: library.get::<CloseFn>(b"mcc128_close\0")?.into_raw(),
                a_in_mode_write:
                    library.get::<ModeWriteFn>(b"mcc128_a_in_mode_write\0")?.into_raw(),
                a_in_range_write:
                    library.get::<RangeWriteFn>(b"mcc128_a_in_range_write\0")?.into_raw(),
                a_in_read: library.get::<AInReadFn>(b"mcc128_a_in_read\0")?.into_raw(),
            })
        }
    }
}

fn check(code: c_int) -> Result<()> {
    if code == RESULT_SUCCESS {
        Ok(())
    } else {
        Err(Error::Hat { code })
    }
}

pub struct HatDriverImpl {
    address: u8,
    api: Api,
    // the raw symbols above are only valid while the library stays loaded
    _library: Library,
}

impl std::fmt::Debug for HatDriverImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HatDriverImpl").field("address", &self.address).finish()
    }
}

impl HatDriverImpl {
    pub fn new() -> Result<HatDriverImpl> {
        let library = unsafe { Library::new(LIBRARY_NAME) }?;
        let api = Api::resolve(&library)?;
        let address = Self::first_address(&api)?;
        check(unsafe { (api.open)(address) })?;
        log::debug!("opened MCC 128 at address {}", address);
        Ok(HatDriverImpl { address, api, _library: library })
    }

    /// Picks the first attached board carrying the MCC 128 ID.
    fn first_address(api: &Api) -> Result<u8> {
        let count = unsafe { (api.hat_list)(HAT_ID_MCC_128, ptr::null_mut()) };
        if count <= 0 {
            return Err(Error::NotFound);
        }
        let mut list = Vec::with_capacity(count as usize);
        for _ in 0..count {
            // zeroed HatInfo is valid: plain integers and a NUL-filled name
            list.push(unsafe { std::mem::zeroed::<HatInfo>() });
        }
        unsafe { (api.hat_list)(HAT_ID_MCC_128, list.as_mut_ptr()) };
        let info = &list[0];
        let name = unsafe { CStr::from_ptr(info.product_name.as_ptr()) };
        log::debug!("hat_list() found {:?} at address {} (of {} boards)",
                    name, info.address, count);
        Ok(info.address)
    }
}

impl Drop for HatDriverImpl {
    fn drop(&mut self) {
        let code = unsafe { (self.api.close)(self.address) };
        if code != RESULT_SUCCESS {
            log::warn!("mcc128_close({}) failed: {}", self.address, Error::Hat { code });
        }
    }
}

impl super::Driver for HatDriverImpl {
    fn a_in_mode_write(&self, mode: u8) -> Result<()> {
        check(unsafe { (self.api.a_in_mode_write)(self.address, mode) })
    }

    fn a_in_range_write(&self, range: u8) -> Result<()> {
        check(unsafe { (self.api.a_in_range_write)(self.address, range) })
    }

    fn a_in_read(&self, channel: u8, options: u32) -> Result<f64> {
        let mut value: c_double = 0.0;
        check(unsafe { (self.api.a_in_read)(self.address, channel, options, &mut value) })?;
        Ok(value)
    }
}
