//! Line-chart rendering of a recording, one series per channel.

use std::path::Path;

use chrono::DateTime;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::sample::Sample;
use crate::{Error, Result};

impl<E: std::error::Error + Send + Sync + 'static> From<DrawingAreaErrorKind<E>> for Error {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            background: WHITE,
            palette: vec![BLUE, RED, GREEN, CYAN, MAGENTA, BLACK],
        }
    }
}

/// Splits a recording into per-channel series, with timestamps rebased to
/// seconds since the first sample. Channels come out in ascending order.
pub fn channel_series(samples: &[Sample]) -> Vec<(u8, Vec<(f64, f64)>)> {
    let mut series: Vec<(u8, Vec<(f64, f64)>)> = Vec::new();
    let start = match samples.first() {
        Some(sample) => sample.timestamp,
        None => return series,
    };
    for sample in samples {
        let point = (sample.timestamp - start, sample.value);
        match series.iter_mut().find(|(channel, _)| *channel == sample.channel) {
            Some((_, points)) => points.push(point),
            None => series.push((sample.channel, vec![point])),
        }
    }
    series.sort_by_key(|&(channel, _)| channel);
    series
}

pub fn render_png(samples: &[Sample], path: &Path, style: &PlotStyle) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::Plot("recording has no samples".into()));
    }
    let start = samples[0].timestamp;
    let start_date = DateTime::from_timestamp_micros((start * 1e6) as i64)
        .ok_or_else(|| Error::Plot(format!("start time {} is out of range", start)))?;
    let caption = format!("Start time: {}", start_date.format("%Y-%m-%d %H:%M:%S%.6f"));

    let series = channel_series(samples);
    let t_max = samples.iter().map(|s| s.timestamp - start).fold(0.0f64, f64::max);
    let v_min = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
    let v_max = samples.iter().map(|s| s.value).fold(f64::NEG_INFINITY, f64::max);
    // keep the axes non-degenerate for single-pass or flat recordings
    let x_bound = if t_max > 0.0 { t_max } else { 1.0 };
    let (y_min, y_max) = if v_max - v_min > f64::EPSILON {
        (v_min, v_max)
    } else {
        (v_min - 1.0, v_max + 1.0)
    };

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(&caption, ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0f64..x_bound, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("date [s]")
        .y_desc("sample [V]")
        .draw()?;
    for (index, (channel, points)) in series.iter().enumerate() {
        let color = style.palette[index % style.palette.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(format!("channel {}", channel))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }
    chart
        .configure_series_labels()
        .border_style(&BLACK.mix(0.4))
        .background_style(&style.background.mix(0.8))
        .draw()?;
    root.present()?;
    log::debug!("rendered {} series to {}", series.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_channel_series_rebases_and_groups() {
        let samples = vec![
            Sample { timestamp: 100.0, channel: 1, value: 0.5 },
            Sample { timestamp: 100.1, channel: 0, value: 1.5 },
            Sample { timestamp: 101.0, channel: 1, value: 0.6 },
        ];
        let series = channel_series(&samples);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, 0);
        assert_eq!(series[0].1, vec![(100.1 - 100.0, 1.5)]);
        assert_eq!(series[1].0, 1);
        assert_eq!(series[1].1, vec![(0.0, 0.5), (1.0, 0.6)]);
    }

    #[test]
    fn test_channel_series_empty() {
        assert!(channel_series(&[]).is_empty());
    }

    #[test]
    fn test_render_rejects_empty_recording() {
        let style = PlotStyle::default();
        match render_png(&[], Path::new("unused.png"), &style) {
            Err(Error::Plot(_)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
