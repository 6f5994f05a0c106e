use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use mcc128::config::{SamplingConfig, SAMPLING_CONFIG_PATH};
use mcc128::sample;
use mcc128::Device;

// clears the '^C' echoed by the terminal on interrupt
const CURSOR_BACK_2: &str = "\x1b[2D";
const ERASE_TO_END_OF_LINE: &str = "\x1b[0K";

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

fn main() -> mcc128::Result<()> {
    env_logger::init();
    let config = SamplingConfig::load(SAMPLING_CONFIG_PATH)?;
    config.validate()?;

    println!("\nMCC 128 single value read tool");
    println!("    Input mode:        {}", config.input_mode);
    println!("    Input range:       {}", config.input_range);
    println!("    Selected channels: {:?}", config.channels);
    println!("    Sampling interval: {} s", config.interval);
    println!("    Sampling duration: {} s", config.duration);

    print!("\nPress 'Enter' to continue ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let handler = handle_sigint as extern "C" fn(libc::c_int);
    unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };

    println!("\nAcquiring data ... Press Ctrl-C to abort");
    Device::with(|device| {
        device.configure(config.input_mode, config.input_range)?;
        let start_time = sample::epoch_now();
        let samples = device.acquire(&config, &INTERRUPTED)?;
        if INTERRUPTED.load(Ordering::Relaxed) {
            print!("{}{}", CURSOR_BACK_2, ERASE_TO_END_OF_LINE);
            println!();
        }
        if config.output_sources.console {
            for sample in samples.iter() {
                println!("{:>17.6}. Ch: {}. {:12.7} V",
                         sample.timestamp, sample.channel, sample.value);
            }
        }
        if config.output_sources.csv {
            let path = sample::csv_path(start_time);
            sample::write_csv(&path, &samples)?;
            println!("new file created: {}", path.display());
        }
        println!("samples per channel: {}",
                 sample::samples_per_channel(&samples, config.channels.len()));
        println!("Done");
        Ok(())
    })
}
