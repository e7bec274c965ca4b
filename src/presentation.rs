use std::ops::Range;

use ndarray::Array;

use crate::model::{ModelParameters, ModelState};
use crate::problem::DataPoint;

/// X domain the model line is sampled over, both ends included.
pub const LINE_DOMAIN: Range<f64> = -6.0..6.5;
pub const LINE_STEP: f64 = 0.5;

/// Samples `y = intercept + slope * x` every [`LINE_STEP`] across [`LINE_DOMAIN`].
pub fn model_line(params: &ModelParameters) -> Vec<(f64, f64)> {
    let samples = ((LINE_DOMAIN.end - LINE_DOMAIN.start) / LINE_STEP).round() as usize + 1;

    Array::linspace(LINE_DOMAIN.start, LINE_DOMAIN.end, samples)
        .iter()
        .map(|&x| (x, params.predict(x)))
        .collect()
}

/// Series data handed to a chart: the scattered points and the model polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub data: Vec<(f64, f64)>,
    pub model: Vec<(f64, f64)>,
}

pub fn build_series(dataset: &[DataPoint], params: &ModelParameters) -> ChartSeries {
    ChartSeries {
        data: dataset.iter().map(|p| (p.x, p.y)).collect(),
        model: model_line(params),
    }
}

/// Replaces only the model polyline, leaving the scattered data untouched.
pub fn update_series(series: &mut ChartSeries, params: &ModelParameters) {
    series.model = model_line(params);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    pub x: Range<f64>,
    pub x_step: f64,
    pub y: Range<f64>,
    pub y_step: f64,
}

impl Default for ChartAxes {
    fn default() -> Self {
        Self {
            x: LINE_DOMAIN,
            x_step: 2.,
            y: -7.0..7.0,
            y_step: 1.,
        }
    }
}

impl ChartAxes {
    pub fn x_ticks(&self) -> usize {
        ticks(&self.x, self.x_step)
    }

    pub fn y_ticks(&self) -> usize {
        ticks(&self.y, self.y_step)
    }
}

/// Upper bound on the tick labels asked for along one axis.
pub const MAX_TICKS: usize = 64;

fn ticks(range: &Range<f64>, step: f64) -> usize {
    let intervals = ((range.end - range.start) / step).floor();

    if !(intervals >= 0.) {
        return 1;
    }

    (intervals.min(MAX_TICKS as f64) as usize).saturating_add(1)
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    pub params: ModelParameters,
    pub mse: f64,
    pub points: usize,
    pub series: &'a ChartSeries,
    pub axes: &'a ChartAxes,
}

impl ViewModel<'_> {
    pub fn intercept_label(&self) -> String {
        format!("{:.2}", self.params.intercept)
    }

    pub fn slope_label(&self) -> String {
        format!("{:.2}", self.params.slope)
    }

    pub fn mse_label(&self) -> String {
        format!("{:.3}", self.mse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Throw away the current series and rebuild from scratch.
    Full,
    /// Only the parameters changed; touch the model line alone.
    Incremental,
}

/// Keeps the series currently on screen and decides how to refresh it.
#[derive(Debug, Default)]
pub struct PresentationAdapter {
    series: Option<ChartSeries>,
    axes: ChartAxes,
}

impl PresentationAdapter {
    pub fn new(axes: ChartAxes) -> Self {
        Self { series: None, axes }
    }

    /// Brings the series in line with `state` and returns the frame to draw.
    ///
    /// An incremental redraw with nothing built yet falls back to a full one.
    pub fn present(&mut self, state: &ModelState, redraw: Redraw) -> ViewModel<'_> {
        let params = state.params();

        let series = match self.series.take() {
            Some(mut series) if redraw == Redraw::Incremental => {
                update_series(&mut series, &params);
                series
            }
            _ => {
                log::debug!("rebuilding chart series for {} points", state.dataset().len());
                build_series(state.dataset(), &params)
            }
        };

        let series = self.series.insert(series);

        ViewModel {
            params,
            mse: state.mse(),
            points: state.dataset().len(),
            series,
            axes: &self.axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Parameter;

    #[test]
    fn test_model_line_samples() {
        let line = model_line(&ModelParameters::new(1., 2.));

        assert_eq!(line.len(), 26);
        assert_eq!(line[0], (-6., -11.));
        assert_eq!(line[25], (6.5, 14.));

        for (a, b) in line.iter().zip(line.iter().skip(1)) {
            assert!((b.0 - a.0 - LINE_STEP).abs() < 1e-12);
        }
    }

    #[test]
    fn test_build_series_keeps_points() {
        let dataset = vec![DataPoint::new(1.5, -2.), DataPoint::new(-3., 0.25)];
        let series = build_series(&dataset, &ModelParameters::default());

        assert_eq!(series.data, vec![(1.5, -2.), (-3., 0.25)]);
        assert_eq!(series.model, model_line(&ModelParameters::default()));
    }

    #[test]
    fn test_incremental_present_updates_line_only() {
        let mut state = ModelState::new(vec![DataPoint::new(0., 1.), DataPoint::new(2., 3.)]);
        let mut adapter = PresentationAdapter::default();

        let data_before = adapter.present(&state, Redraw::Full).series.data.clone();

        state.set(Parameter::Slope, 0.);
        let view = adapter.present(&state, Redraw::Incremental);

        assert_eq!(view.series.data, data_before);
        assert!(view.series.model.iter().all(|&(_, y)| y == 0.));
    }

    #[test]
    fn test_incremental_without_series_rebuilds() {
        let state = ModelState::new(vec![DataPoint::new(0., 1.)]);
        let mut adapter = PresentationAdapter::default();

        let view = adapter.present(&state, Redraw::Incremental);

        assert_eq!(view.series.data, vec![(0., 1.)]);
    }

    #[test]
    fn test_full_present_picks_up_new_dataset() {
        let mut state = ModelState::new(vec![DataPoint::new(0., 1.)]);
        let mut adapter = PresentationAdapter::default();
        adapter.present(&state, Redraw::Full);

        state.replace_dataset(vec![DataPoint::new(4., 4.), DataPoint::new(5., 5.)]);
        let view = adapter.present(&state, Redraw::Full);

        assert_eq!(view.series.data, vec![(4., 4.), (5., 5.)]);
        assert_eq!(view.points, 2);
    }

    #[test]
    fn test_view_labels() {
        let mut state = ModelState::new(vec![DataPoint::new(0., 2.), DataPoint::new(1., 0.)]);
        state.set(Parameter::Intercept, 2.);
        state.set(Parameter::Slope, 0.);

        let mut adapter = PresentationAdapter::default();
        let view = adapter.present(&state, Redraw::Full);

        assert_eq!(view.intercept_label(), "2.00");
        assert_eq!(view.slope_label(), "0.00");
        assert_eq!(view.mse_label(), "2.000");
    }

    #[test]
    fn test_default_axes_ticks() {
        let axes = ChartAxes::default();

        assert_eq!(axes.x_ticks(), 7);
        assert_eq!(axes.y_ticks(), 15);
    }

    #[test]
    fn test_wide_axes_ticks_are_capped() {
        let wide = ChartAxes {
            y: -1e300..1e300,
            ..ChartAxes::default()
        };
        assert_eq!(wide.y_ticks(), MAX_TICKS + 1);

        let unbounded = ChartAxes {
            y: f64::NEG_INFINITY..f64::INFINITY,
            ..ChartAxes::default()
        };
        assert_eq!(unbounded.y_ticks(), MAX_TICKS + 1);

        let reversed = ChartAxes {
            y: 3.0..-3.0,
            ..ChartAxes::default()
        };
        assert_eq!(reversed.y_ticks(), 1);
    }
}
