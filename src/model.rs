use crate::problem::{DataPoint, Dataset};

/// The user-controlled line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub intercept: f64,
    pub slope: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            intercept: 0.,
            slope: 1.,
        }
    }
}

impl ModelParameters {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Mean squared error of `params` over `dataset`, `0` when the dataset is empty.
pub fn mse(dataset: &[DataPoint], params: &ModelParameters) -> f64 {
    if dataset.is_empty() {
        return 0.;
    }

    let sum_squared_errors: f64 = dataset
        .iter()
        .map(|p| (p.y - params.predict(p.x)).powi(2))
        .sum();

    sum_squared_errors / dataset.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Intercept,
    Slope,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Intercept => "w0 (intercept)",
            Parameter::Slope => "w1 (slope)",
        }
    }

    pub fn slider(&self) -> SliderRange {
        match self {
            Parameter::Intercept => INTERCEPT_SLIDER,
            Parameter::Slope => SLOPE_SLIDER,
        }
    }

    pub fn get(&self, params: &ModelParameters) -> f64 {
        match self {
            Parameter::Intercept => params.intercept,
            Parameter::Slope => params.slope,
        }
    }

    pub fn toggle(&self) -> Parameter {
        match self {
            Parameter::Intercept => Parameter::Slope,
            Parameter::Slope => Parameter::Intercept,
        }
    }
}

/// Bounds and granularity of a parameter slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const INTERCEPT_SLIDER: SliderRange = SliderRange {
    min: -5.,
    max: 5.,
    step: 0.1,
};

pub const SLOPE_SLIDER: SliderRange = SliderRange {
    min: -3.,
    max: 3.,
    step: 0.05,
};

impl SliderRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Moves `value` by `steps` slider steps, snapped to the step grid.
    pub fn offset(&self, value: f64, steps: i32) -> f64 {
        let ticks = (value / self.step).round() + steps as f64;
        self.clamp(ticks * self.step)
    }

    /// Position of `value` along the slider in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        ((self.clamp(value) - self.min) / (self.max - self.min)).clamp(0., 1.)
    }
}

/// The dataset and the parameters the user is currently fitting to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    dataset: Dataset,
    params: ModelParameters,
}

impl ModelState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            params: ModelParameters::default(),
        }
    }

    pub fn dataset(&self) -> &[DataPoint] {
        &self.dataset
    }

    pub fn params(&self) -> ModelParameters {
        self.params
    }

    /// Sets one parameter, clamped to its slider range. Returns the applied value.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> f64 {
        let value = parameter.slider().clamp(value);

        match parameter {
            Parameter::Intercept => self.params.intercept = value,
            Parameter::Slope => self.params.slope = value,
        }

        value
    }

    /// Swaps in a freshly generated dataset and resets the parameters.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.params = ModelParameters::default();
    }

    pub fn mse(&self) -> f64 {
        mse(&self.dataset, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::problem;

    #[test]
    fn test_mse_of_empty_dataset_is_zero() {
        assert_eq!(mse(&[], &ModelParameters::default()), 0.);
        assert_eq!(mse(&[], &ModelParameters::new(-4., 2.5)), 0.);
    }

    #[test]
    fn test_mse_known_value() {
        let dataset = [DataPoint::new(0., 2.), DataPoint::new(1., 0.)];

        assert_eq!(mse(&dataset, &ModelParameters::new(2., 0.)), 2.0);
    }

    #[test]
    fn test_mse_zero_iff_points_on_line() {
        let params = ModelParameters::new(0.5, -1.25);

        let on_line: Vec<_> = [-3., -1., 0., 2., 4.5]
            .into_iter()
            .map(|x| DataPoint::new(x, params.predict(x)))
            .collect();

        assert_eq!(mse(&on_line, &params), 0.);

        let mut off_line = on_line.clone();
        off_line[2].y += 0.01;

        assert!(mse(&off_line, &params) > 0.);
    }

    #[test]
    fn test_mse_non_negative() {
        let mut rng = StdRng::seed_from_u64(5);
        let dataset = problem::generate(30, &mut rng);

        for (intercept, slope) in [(0., 1.), (-5., 3.), (5., -3.), (0.3, 0.)] {
            assert!(mse(&dataset, &ModelParameters::new(intercept, slope)) >= 0.);
        }
    }

    #[test]
    fn test_set_clamps_to_slider() {
        let mut state = ModelState::new(vec![DataPoint::new(0., 0.)]);

        assert_eq!(state.set(Parameter::Intercept, 12.), INTERCEPT_SLIDER.max);
        assert_eq!(state.set(Parameter::Slope, -12.), SLOPE_SLIDER.min);
        assert_eq!(
            state.params(),
            ModelParameters::new(INTERCEPT_SLIDER.max, SLOPE_SLIDER.min)
        );
    }

    #[test]
    fn test_parameter_change_keeps_dataset() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = ModelState::new(problem::generate(30, &mut rng));

        let before = state.dataset().to_vec();

        state.set(Parameter::Intercept, 1.7);
        state.set(Parameter::Slope, -0.4);

        assert_eq!(state.dataset(), before.as_slice());
    }

    #[test]
    fn test_replace_dataset_resets_params() {
        let mut state = ModelState::new(vec![]);
        state.set(Parameter::Intercept, 3.);
        state.set(Parameter::Slope, 2.);

        state.replace_dataset(vec![DataPoint::new(1., 1.)]);

        assert_eq!(state.params(), ModelParameters::new(0., 1.));
        assert_eq!(state.dataset().len(), 1);
    }

    #[test]
    fn test_slider_offset_snaps_and_clamps() {
        assert!((SLOPE_SLIDER.offset(1., 1) - 1.05).abs() < 1e-9);
        assert!((SLOPE_SLIDER.offset(1.0001, -2) - 0.9).abs() < 1e-9);
        assert_eq!(SLOPE_SLIDER.offset(2.95, 10), SLOPE_SLIDER.max);
        assert_eq!(INTERCEPT_SLIDER.offset(-4.9, -10), INTERCEPT_SLIDER.min);
    }

    #[test]
    fn test_slider_ratio() {
        assert_eq!(INTERCEPT_SLIDER.ratio(0.), 0.5);
        assert_eq!(SLOPE_SLIDER.ratio(-3.), 0.);
        assert_eq!(SLOPE_SLIDER.ratio(100.), 1.);
    }
}
