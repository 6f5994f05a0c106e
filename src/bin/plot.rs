//! Renders a chosen recording from the samples directory to a PNG chart.

use std::io::{self, BufRead, Write};

use mcc128::plot::{self, PlotStyle};
use mcc128::sample;
use mcc128::Error;

fn main() -> mcc128::Result<()> {
    env_logger::init();
    let recordings = sample::list_recordings()?;
    println!("{} csv files:", recordings.len());
    for (index, path) in recordings.iter().enumerate() {
        println!("{:3}. {}", index, path.display());
    }

    print!("Choose csv file for visualization: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let index = line.trim().parse::<usize>()
        .map_err(|_| Error::Other("not a valid index".into()))?;
    let path = recordings.get(index)
        .ok_or_else(|| Error::Other("index out of bounds".into()))?;

    let samples = sample::read_csv(path)?;
    let png_path = path.with_extension("png");
    plot::render_png(&samples, &png_path, &PlotStyle::default())?;
    println!("rendered {}", png_path.display());
    Ok(())
}
