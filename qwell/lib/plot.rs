//! PNG rendering of sweep results with [`plotters`].

use std::path::{ Path, PathBuf };
use log::{ info, warn };
use plotters::prelude::*;
use crate::{
    error::{ ConfigError, PlotError },
    sweep::Dispersion,
};

pub type PResult<T> = Result<T, PlotError>;

const BAND_COLORS: [RGBColor; 2] = [RGBColor(0, 102, 204), RGBColor(204, 51, 0)];

/// Axis labels, y-axis bounds, and image size for [`render`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// x-axis label (default: `"Width"`).
    pub x_label: String,
    /// y-axis label (default: `"Energy (eV)"`).
    pub y_label: String,
    /// y-axis bounds; data outside are clipped (default: `(0.0, 0.4)`).
    pub y_bounds: (f64, f64),
    /// Image size in pixels (default: `(800, 600)`).
    pub size: (u32, u32),
    /// Draw tick labels, axis labels, and the legend (default: `true`).
    ///
    /// With `false` no text is drawn, so no system font is needed.
    pub annotate: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            x_label: "Width".to_string(),
            y_label: "Energy (eV)".to_string(),
            y_bounds: (0.0, 0.4),
            size: (800, 600),
            annotate: true,
        }
    }
}

impl PlotStyle {
    /// Create a new `PlotStyle` with default image size.
    pub fn new(x_label: &str, y_label: &str, y_bounds: (f64, f64)) -> Self {
        Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            y_bounds,
            ..Self::default()
        }
    }
}

fn draw_err<E: std::fmt::Debug>(path: &Path) -> impl Fn(E) -> PlotError + '_ {
    move |e| PlotError::Draw { path: path.to_path_buf(), reason: format!("{:?}", e) }
}

/// Plot every band of `disp` against its sweep coordinates on one set of axes
/// and write the result as a PNG to `path`.
///
/// Missing parent directories of `path` are created.
pub fn render<P>(disp: &Dispersion, style: &PlotStyle, path: P) -> PResult<()>
where P: AsRef<Path>
{
    let path: PathBuf = path.as_ref().to_path_buf();
    let (y_min, y_max) = style.y_bounds;
    ConfigError::check_bounds(y_min, y_max)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|source| {
                PlotError::CreateDir { path: dir.to_path_buf(), source }
            })?;
    }
    let (e_min, e_max) = disp.energy_range();
    if e_min < y_min || e_max > y_max {
        warn!(
            "energies span [{:.4}, {:.4}]; curves are clipped to [{}, {}]",
            e_min, e_max, y_min, y_max,
        );
    }

    let root = BitMapBackend::new(&path, style.size).into_drawing_area();
    draw_chart(&root, disp, style, &path)?;
    root.present().map_err(draw_err(&path))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    disp: &Dispersion,
    style: &PlotStyle,
    path: &Path,
) -> PResult<()>
where DB::ErrorType: 'static
{
    root.fill(&WHITE).map_err(draw_err(path))?;

    let x = disp.x();
    let (mut x_min, mut x_max)
        = x.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), xk| {
            (lo.min(*xk), hi.max(*xk))
        });
    if x_max <= x_min {
        x_min -= 0.5;
        x_max += 0.5;
    }
    let (y_min, y_max) = style.y_bounds;

    let mut chart
        = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_err(path))?;

    if style.annotate {
        chart.configure_mesh()
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .x_label_style(("sans-serif", 16))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(draw_err(path))?;
    } else {
        chart.configure_mesh()
            .disable_x_axis()
            .disable_y_axis()
            .draw()
            .map_err(draw_err(path))?;
    }

    for (i, band) in disp.energies().rows().into_iter().enumerate() {
        let color = BAND_COLORS[i % BAND_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                x.iter().zip(band.iter()).map(|(xk, ek)| (*xk, *ek)),
                color.stroke_width(2),
            ))
            .map_err(draw_err(path))?
            .label(format!("E{}", i))
            .legend(move |(lx, ly)| {
                PathElement::new(vec![(lx, ly), (lx + 20, ly)], color)
            });
    }

    if style.annotate {
        chart.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err(path))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.x_label, "Width");
        assert_eq!(style.y_label, "Energy (eV)");
        assert_eq!(style.y_bounds, (0.0, 0.4));
        let style = PlotStyle::new("k", "E", (-1.0, 1.0));
        assert_eq!(style.size, (800, 600));
        assert!(style.annotate);
    }
}
