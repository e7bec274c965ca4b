use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PlaygroundError, Result};
use crate::presentation::{ChartAxes, ChartSeries};

pub const DATA_COLOR: RGBColor = RGBColor(0x25, 0x63, 0xeb);
pub const MODEL_COLOR: RGBColor = RGBColor(0xef, 0x44, 0x44);
const GRID_COLOR: RGBColor = RGBColor(0xe5, 0xe7, 0xeb);

pub const SNAPSHOT_FILENAME: &str = "linear-regression.svg";
pub const SNAPSHOT_SIZE: (u32, u32) = (800, 600);

pub fn plot_problem<DB>(
    series: &ChartSeries,
    axes: &ChartAxes,
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(drawing_area);

    let mut chart_context = chart_builder
        .caption(caption, ("sans-serif", 20))
        .set_all_label_area_size(50)
        .margin(20)
        .build_cartesian_2d(axes.x.clone(), axes.y.clone())?;

    chart_context
        .configure_mesh()
        .x_labels(axes.x_ticks())
        .x_desc("x")
        .y_labels(axes.y_ticks())
        .y_desc("y")
        .light_line_style(&WHITE)
        .bold_line_style(&GRID_COLOR)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    chart_context
        .draw_series(
            series
                .data
                .iter()
                .map(|&point| Circle::new(point, 5, DATA_COLOR.filled())),
        )?
        .label("Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, DATA_COLOR.filled()));

    chart_context
        .draw_series(LineSeries::new(
            series.model.iter().copied(),
            MODEL_COLOR.stroke_width(2),
        ))?
        .label("Model")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MODEL_COLOR.stroke_width(2)));

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    Ok(())
}

/// Renders the chart into an in-memory SVG document.
pub fn svg_document(series: &ChartSeries, axes: &ChartAxes, caption: &str) -> Result<String> {
    let mut svg = String::new();

    {
        let drawing_area = SVGBackend::with_string(&mut svg, SNAPSHOT_SIZE).into_drawing_area();

        plot_problem(series, axes, caption, &drawing_area)
            .map_err(|e| PlaygroundError::Plot(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlaygroundError::Plot(e.to_string()))?;
    }

    Ok(svg)
}
