//! @ai:module:intent Line charts of real time against matrix size
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::config::ChartConfig;
use crate::series::BucketExport;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate every configured chart for every variant
    fn generate_all(&self, exports: &[BucketExport], output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates one line chart per variant and axis scale
pub struct ChartGenerator {
    config: ChartConfig,
}

impl ChartGenerator {
    /// @ai:intent Create a chart generator
    /// @ai:effects pure
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// @ai:intent Generate a chart with linear axes
    /// @ai:effects fs:write
    fn generate_linear_chart(&self, export: &BucketExport, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let (max_size, max_time) = linear_bounds(export);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{}: real time by matrix size", export.label),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(0f64..max_size, 0f64..max_time)?;

        chart
            .configure_mesh()
            .x_desc("Matrix size")
            .y_desc(time_axis_label(export))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()?;

        draw_families(&mut chart, export, |_| true)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// @ai:intent Generate a chart with logarithmic axes
    /// @ai:effects fs:write
    fn generate_log_log_chart(&self, export: &BucketExport, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let ((min_size, max_size), (min_time, max_time)) = log_bounds(export);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{}: real time by matrix size (log-log)", export.label),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(
                (min_size..max_size).log_scale(),
                (min_time..max_time).log_scale(),
            )?;

        chart
            .configure_mesh()
            .x_desc("Matrix size")
            .y_desc(time_axis_label(export))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1e}", y))
            .draw()?;

        draw_families(&mut chart, export, is_positive)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate all charts
    /// @ai:effects fs:write
    fn generate_all(&self, exports: &[BucketExport], output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let mut generated = Vec::new();

        for export in exports {
            let stem = export.variant.file_stem();

            if self.config.scale.includes_linear() {
                let name = format!("{}_linear.png", stem);
                self.generate_linear_chart(export, &output_dir.join(&name))?;
                generated.push(name);
            }

            if self.config.scale.includes_log_log() {
                let name = format!("{}_loglog.png", stem);
                self.generate_log_log_chart(export, &output_dir.join(&name))?;
                generated.push(name);
            }
        }

        Ok(generated)
    }
}

/// @ai:intent Draw one line with point markers per family
/// @ai:effects io
fn draw_families<X, Y>(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<X, Y>>,
    export: &BucketExport,
    keep: impl Fn(&(f64, f64)) -> bool,
) -> Result<()>
where
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    for (idx, series) in export.series.iter().enumerate() {
        let data: Vec<(f64, f64)> = series.points().filter(|p| keep(p)).collect();
        if data.is_empty() {
            continue;
        }

        let color = Palette99::pick(idx).to_rgba();

        chart
            .draw_series(LineSeries::new(data.clone(), color.stroke_width(2)))?
            .label(series.family.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(
            data.into_iter()
                .map(|point| Circle::new(point, 3, color.filled())),
        )?;
    }

    Ok(())
}

fn is_positive(point: &(f64, f64)) -> bool {
    point.0 > 0.0 && point.1 > 0.0
}

fn time_axis_label(export: &BucketExport) -> String {
    match &export.time_unit {
        Some(unit) => format!("Real time ({})", unit),
        None => "Real time".to_string(),
    }
}

/// @ai:intent Upper bounds for linear axes, with headroom
/// @ai:post both bounds are strictly positive
/// @ai:effects pure
fn linear_bounds(export: &BucketExport) -> (f64, f64) {
    let (max_size, max_time) = export
        .series
        .iter()
        .flat_map(|s| s.points())
        .fold((0.0_f64, 0.0_f64), |(mx, my), (x, y)| (mx.max(x), my.max(y)));

    let max_size = if max_size > 0.0 { max_size * 1.05 } else { 1.0 };
    let max_time = if max_time > 0.0 { max_time * 1.1 } else { 1.0 };
    (max_size, max_time)
}

/// @ai:intent Ranges for log axes covering every positive point
/// @ai:post every range is strictly positive and non-degenerate
/// @ai:effects pure
fn log_bounds(export: &BucketExport) -> ((f64, f64), (f64, f64)) {
    let points: Vec<_> = export
        .series
        .iter()
        .flat_map(|s| s.points())
        .filter(is_positive)
        .collect();

    if points.is_empty() {
        return ((1.0, 10.0), (1.0, 10.0));
    }

    let range = |values: Vec<f64>| {
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        (min / 2.0, max * 2.0)
    };

    (
        range(points.iter().map(|p| p.0).collect()),
        range(points.iter().map(|p| p.1).collect()),
    )
}
