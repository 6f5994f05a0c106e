mod sys;
mod device;

pub mod config;
pub mod params;
pub mod plot;
pub mod remote;
pub mod sample;

#[derive(Debug)]
pub enum Error {
    NotFound,
    Library(libloading::Error),
    Hat { code: i32 },
    InvalidChannel { channel: u8, limit: u8 },
    Io(std::io::Error),
    Config(serde_json::Error),
    Csv(csv::Error),
    Plot(String),
    Remote(String),
    Other(Box<dyn std::error::Error + Sync + Send + 'static>),
}

impl Error {
    // message table from the vendor's hat_error_message()
    fn hat_message(code: i32) -> &'static str {
        match code {
            -1 => "incorrect parameter value",
            -2 => "device is busy",
            -3 => "timeout communicating with the device",
            -4 => "timeout obtaining the device lock",
            -5 => "invalid device address",
            -6 => "needed resource unavailable",
            -7 => "communication failure with the device",
            _  => "undefined error",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound =>
                write!(f, "no MCC 128 board found"),
            Self::Library(error) =>
                write!(f, "failed to load the daqhats library: {}", error),
            Self::Hat { code } =>
                write!(f, "daqhats error {}: {}", code, Self::hat_message(*code)),
            Self::InvalidChannel { channel, limit } =>
                write!(f, "invalid channel selection {} - must be 0 - {}", channel, limit),
            Self::Io(io_error) =>
                write!(f, "I/O error: {}", io_error),
            Self::Config(json_error) =>
                write!(f, "configuration error: {}", json_error),
            Self::Csv(csv_error) =>
                write!(f, "CSV error: {}", csv_error),
            Self::Plot(message) =>
                write!(f, "failed to render plot: {}", message),
            Self::Remote(message) =>
                write!(f, "remote copy failed: {}", message),
            Self::Other(error) =>
                write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(ref error) => Some(error),
            Self::Io(ref io_error) => Some(io_error),
            Self::Config(ref json_error) => Some(json_error),
            Self::Csv(ref csv_error) => Some(csv_error),
            _ => None
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<libloading::Error> for Error {
    fn from(error: libloading::Error) -> Self {
        Error::Library(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Config(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

pub type Result<T> =
    core::result::Result<T, Error>;

pub use config::{
    SamplingConfig,
    OutputSources,
    RemoteConfig,
};

pub use params::{
    AnalogInputMode,
    AnalogInputRange,
    OptionFlags,
};

pub use sample::Sample;

pub type Device =
    device::Device<crate::sys::imp::HatDriverImpl>;
