//! PNG altitude chart writer.
//!
//! Draws elevation (y) over cumulative distance (x) as a single line across
//! all records; tracks are not told apart. The chart has a white background
//! and gray gridlines. When no usable font is found for the axis labels,
//! the chart is drawn again without them.

use std::ops::Range;
use std::path::Path;

use clap::Parser;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters_backend::DrawingErrorKind;
use tracing::warn;

use super::write_error;
use crate::error::{ProfileError, Result};
use crate::options;
use crate::record::{ProfileRecord, KEY_DISTANCE, KEY_ELEVATION};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;

/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;

const GRID: RGBColor = RGBColor(128, 128, 128);
const LINE: RGBColor = RGBColor(200, 0, 0);

/// Image size of the chart.
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
#[command(name = "PNG", about = "Options for the PNG format.")]
pub struct ChartConfig {
    /// The width of the image, at least 1; zero or negative values are
    /// rejected rather than replaced by the default
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_name = "pixels",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// The height of the image, at least 1; zero or negative values are
    /// rejected rather than replaced by the default
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_name = "pixels",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Writes a profile as a PNG line chart.
#[derive(Debug, Clone, Default)]
pub struct PngWriter {
    config: ChartConfig,
}

impl PngWriter {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Builds a writer from an option string such as `--width 800 --height 300`.
    pub fn from_options(options: &str) -> Result<Self> {
        Ok(Self::new(options::parse("PNG", options)?))
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Renders the chart for `records` and saves it to `path` as PNG,
    /// whatever the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidElevation`] when an elevation is not a
    /// number, and [`ProfileError::Write`] when drawing or saving fails.
    pub fn write(&self, records: &[ProfileRecord], path: &Path) -> Result<()> {
        let series = series(records)?;
        let pixels = self.render(&series).map_err(|e| write_error(path, e))?;

        image::save_buffer_with_format(
            path,
            &pixels,
            self.config.width,
            self.config.height,
            image::ExtendedColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| write_error(path, e))
    }

    /// Draws the chart into an RGB pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Render`] when plotting fails for a reason
    /// other than a missing font.
    pub fn render(&self, series: &[(f64, f64)]) -> Result<Vec<u8>> {
        let rendered = match self.render_with(series, true) {
            Err(DrawError::Font(message)) => {
                warn!(%message, "No font for axis labels, drawing chart without them");
                self.render_with(series, false)
            }
            other => other,
        };
        rendered.map_err(|e| ProfileError::Render(e.to_string()))
    }

    fn render_with(
        &self,
        series: &[(f64, f64)],
        labels: bool,
    ) -> std::result::Result<Vec<u8>, DrawError> {
        let (width, height) = (self.config.width, self.config.height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            draw(&root, series, labels)?;
        }

        Ok(pixels)
    }
}

/// Pairs each record's distance with its parsed elevation.
///
/// Points with a non-finite distance are left out of the chart.
pub fn series(records: &[ProfileRecord]) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let elevation = record
            .elevation_value()
            .ok_or_else(|| ProfileError::InvalidElevation {
                track: record.track.clone(),
                time: record.time.clone(),
                value: record.elevation.clone(),
            })?;
        if record.distance.is_finite() && elevation.is_finite() {
            points.push((record.distance, elevation));
        }
    }
    Ok(points)
}

/// Axis ranges covering `series`, widened when empty or flat.
fn bounds(series: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    fn span(values: impl Iterator<Item = f64>) -> Range<f64> {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min > max {
            0.0..1.0
        } else if min == max {
            (min - 1.0)..(max + 1.0)
        } else {
            min..max
        }
    }

    (
        span(series.iter().map(|p| p.0)),
        span(series.iter().map(|p| p.1)),
    )
}

/// Plotting failure, split so a missing font can be told apart.
#[derive(Debug)]
enum DrawError {
    Font(String),
    Other(String),
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::Font(message) => write!(f, "font error: {message}"),
            DrawError::Other(message) => write!(f, "plotting error: {message}"),
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DrawError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        match err {
            DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e)) => {
                DrawError::Font(e.to_string())
            }
            other => DrawError::Other(other.to_string()),
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[(f64, f64)],
    labels: bool,
) -> std::result::Result<(), DrawError> {
    root.fill(&WHITE)?;

    let (x_range, y_range) = bounds(series);
    let mut builder = ChartBuilder::on(root);
    builder.margin(10);
    if labels {
        builder
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40);
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    let whole = |v: &f64| format!("{:.0}", v);
    {
        let mut mesh = chart.configure_mesh();
        mesh.bold_line_style(&GRID)
            .light_line_style(&GRID.mix(0.3))
            .x_label_formatter(&whole)
            .y_label_formatter(&whole);
        if labels {
            mesh.x_desc(KEY_DISTANCE).y_desc(KEY_ELEVATION);
        }
        mesh.draw()?;
    }

    chart.draw_series(LineSeries::new(series.iter().copied(), &LINE))?;

    root.present()?;
    Ok(())
}
