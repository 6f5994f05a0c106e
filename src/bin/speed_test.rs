//! Times single-value reads across channel counts and sampling numbers.

use std::time::Instant;

use mcc128::{AnalogInputMode, AnalogInputRange, Device, OptionFlags};

const CHANNEL_MAXIMAL_NUMBER: u8 = 4;
const SAMPLING_START_NUMBER: u32 = 100;
const SAMPLING_STEP_MULTIPLIER: u32 = 10;
const SAMPLING_STEPS_NUMBER: u32 = 3;

fn main() -> mcc128::Result<()> {
    env_logger::init();
    Device::with(|device| {
        device.configure(AnalogInputMode::SingleEnded, AnalogInputRange::Bip10V)?;
        println!("Sampling speed test");
        for channel_number in 1..=CHANNEL_MAXIMAL_NUMBER {
            println!("Channel number: {}", channel_number);
            println!("{:>15} | {:>10} | {:>12} | {:>14} | {:>21}",
                     "Sampling number", "Time [s]", "per channel",
                     "per sampling", "per ch and sampling");
            for step in 0..SAMPLING_STEPS_NUMBER {
                let sampling_number = SAMPLING_START_NUMBER * SAMPLING_STEP_MULTIPLIER.pow(step);
                let start = Instant::now();
                for _ in 0..sampling_number {
                    for channel in 0..channel_number {
                        device.read_voltage(channel, OptionFlags::empty())?;
                    }
                }
                let elapsed = start.elapsed().as_secs_f64();
                let per_channel = elapsed / channel_number as f64;
                let per_sampling = elapsed / sampling_number as f64;
                let per_channel_and_sampling = per_channel / sampling_number as f64;
                println!("{:>15} | {:>10.4} | {:>12.7} | {:>14.9} | {:>21.12}",
                         sampling_number, elapsed, per_channel,
                         per_sampling, per_channel_and_sampling);
            }
        }
        Ok(())
    })
}
