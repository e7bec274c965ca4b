use std::path::PathBuf;

use rand::Rng;

use crate::config::Settings;
use crate::error::{PlaygroundError, Result};
use crate::export::{self, DownloadSink};
use crate::model::{ModelState, Parameter};
use crate::plots::{self, SNAPSHOT_FILENAME};
use crate::presentation::{PresentationAdapter, Redraw, ViewModel};
use crate::problem::Generator;

/// User input, as dispatched by whatever UI hosts the playground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    ParameterChanged(Parameter, f64),
    Regenerate,
    ExportRequested,
    SnapshotRequested,
}

/// The surface the controller draws on.
pub trait View {
    fn render(&mut self, view: &ViewModel<'_>);

    /// Blocking notice the user has to acknowledge.
    fn notify(&mut self, message: &str);

    /// Transient status line.
    fn status(&mut self, _message: &str) {}
}

/// Owns the problem, the user's parameters and everything derived from them.
pub struct Controller<R, S> {
    state: ModelState,
    generator: Generator,
    adapter: PresentationAdapter,
    rng: R,
    sink: S,
}

impl<R: Rng, S: DownloadSink> Controller<R, S> {
    pub fn new(settings: &Settings, mut rng: R, sink: S) -> Self {
        let state = ModelState::new(settings.generator.generate(&mut rng));

        Self {
            state,
            generator: settings.generator,
            adapter: PresentationAdapter::new(settings.axes.clone()),
            rng,
            sink,
        }
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// First full draw after construction.
    pub fn start<V: View + ?Sized>(&mut self, view: &mut V) {
        view.render(&self.adapter.present(&self.state, Redraw::Full));
    }

    pub fn handle<V: View + ?Sized>(&mut self, event: UiEvent, view: &mut V) {
        match event {
            UiEvent::ParameterChanged(parameter, value) => {
                self.on_parameter_change(parameter, value, view)
            }
            UiEvent::Regenerate => self.on_regenerate(view),
            UiEvent::ExportRequested => self.on_export_request(view),
            UiEvent::SnapshotRequested => self.on_snapshot_request(view),
        }
    }

    pub fn on_parameter_change<V: View + ?Sized>(
        &mut self,
        parameter: Parameter,
        value: f64,
        view: &mut V,
    ) {
        let applied = self.state.set(parameter, value);
        log::debug!("{} set to {applied}", parameter.name());

        view.render(&self.adapter.present(&self.state, Redraw::Incremental));
    }

    pub fn on_regenerate<V: View + ?Sized>(&mut self, view: &mut V) {
        let dataset = self.generator.generate(&mut self.rng);
        log::info!("generated new problem with {} points", dataset.len());

        self.state.replace_dataset(dataset);

        view.render(&self.adapter.present(&self.state, Redraw::Full));
    }

    pub fn on_export_request<V: View + ?Sized>(&mut self, view: &mut V) {
        match export::export(self.state.dataset(), &mut self.sink) {
            Ok(path) => view.status(&format!("saved {}", path.display())),
            Err(e) => report(e, view),
        }
    }

    pub fn on_snapshot_request<V: View + ?Sized>(&mut self, view: &mut V) {
        match self.save_snapshot() {
            Ok(path) => view.status(&format!("saved {}", path.display())),
            Err(e) => report(e, view),
        }
    }

    fn save_snapshot(&mut self) -> Result<PathBuf> {
        let frame = self.adapter.present(&self.state, Redraw::Incremental);

        let caption = format!(
            "w0 = {}, w1 = {}, MSE = {}",
            frame.intercept_label(),
            frame.slope_label(),
            frame.mse_label()
        );

        let svg = plots::svg_document(frame.series, frame.axes, &caption)?;

        self.sink.save(SNAPSHOT_FILENAME, &svg)
    }
}

fn report<V: View + ?Sized>(error: PlaygroundError, view: &mut V) {
    match error {
        PlaygroundError::NoData => log::warn!("export requested with an empty dataset"),
        ref e => log::error!("{e}"),
    }

    view.notify(&error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::export::EXPORT_FILENAME;
    use crate::model::ModelParameters;
    use crate::presentation::ChartSeries;
    use crate::problem::X_RANGE;

    #[derive(Default)]
    struct MemorySink {
        saved: Vec<(String, String)>,
    }

    impl DownloadSink for MemorySink {
        fn save(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
            self.saved.push((filename.to_owned(), contents.to_owned()));
            Ok(PathBuf::from(filename))
        }
    }

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<(ModelParameters, f64, ChartSeries)>,
        notices: Vec<String>,
        statuses: Vec<String>,
    }

    impl View for RecordingView {
        fn render(&mut self, view: &ViewModel<'_>) {
            self.frames
                .push((view.params, view.mse, view.series.clone()));
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_owned());
        }

        fn status(&mut self, message: &str) {
            self.statuses.push(message.to_owned());
        }
    }

    fn controller(points: usize) -> Controller<StdRng, MemorySink> {
        let settings = Settings {
            generator: Generator {
                points,
                ..Generator::default()
            },
            seed: Some(17),
            ..Settings::default()
        };

        Controller::new(&settings, settings.rng(), MemorySink::default())
    }

    #[test]
    fn test_start_renders_initial_problem() {
        let mut controller = controller(30);
        let mut view = RecordingView::default();

        controller.start(&mut view);

        let (params, mse, series) = &view.frames[0];
        assert_eq!(*params, ModelParameters::default());
        assert_eq!(*mse, controller.state().mse());
        assert_eq!(series.data.len(), 30);
        assert_eq!(series.model.len(), 26);
    }

    #[test]
    fn test_parameter_change_rerenders_with_same_data() {
        let mut controller = controller(30);
        let mut view = RecordingView::default();
        controller.start(&mut view);

        controller.handle(UiEvent::ParameterChanged(Parameter::Intercept, 1.5), &mut view);
        controller.handle(UiEvent::ParameterChanged(Parameter::Slope, -0.5), &mut view);

        assert_eq!(view.frames.len(), 3);
        assert_eq!(view.frames[2].0, ModelParameters::new(1.5, -0.5));
        assert_eq!(view.frames[0].2.data, view.frames[2].2.data);
        assert_ne!(view.frames[0].2.model, view.frames[2].2.model);
    }

    #[test]
    fn test_regenerate_resets_parameters() {
        let mut controller = controller(30);
        let mut view = RecordingView::default();
        controller.start(&mut view);

        controller.handle(UiEvent::ParameterChanged(Parameter::Intercept, 2.), &mut view);
        let before = controller.state().dataset().to_vec();

        controller.handle(UiEvent::Regenerate, &mut view);

        let state = controller.state();
        assert_eq!(state.params(), ModelParameters::new(0., 1.));
        assert_eq!(state.dataset().len(), 30);
        assert!(state.dataset().iter().all(|p| X_RANGE.contains(&p.x)));
        assert_ne!(state.dataset(), before.as_slice());

        let (params, _, series) = view.frames.last().unwrap();
        assert_eq!(*params, ModelParameters::default());
        assert_eq!(series.data.len(), 30);
    }

    #[test]
    fn test_export_saves_csv() {
        let mut controller = controller(3);
        let mut view = RecordingView::default();

        controller.handle(UiEvent::ExportRequested, &mut view);

        let (filename, contents) = &controller.sink().saved[0];
        assert_eq!(filename, EXPORT_FILENAME);
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.starts_with("x,y\n"));
        assert!(view.notices.is_empty());
        assert_eq!(view.statuses.len(), 1);
    }

    #[test]
    fn test_export_empty_dataset_notifies() {
        let mut controller = controller(0);
        let mut view = RecordingView::default();

        controller.handle(UiEvent::ExportRequested, &mut view);

        assert!(controller.sink().saved.is_empty());
        assert_eq!(view.notices, vec!["No data to download".to_owned()]);
    }

    #[test]
    fn test_snapshot_saves_svg() {
        let mut controller = controller(5);
        let mut view = RecordingView::default();
        controller.start(&mut view);

        controller.handle(UiEvent::SnapshotRequested, &mut view);

        let (filename, contents) = &controller.sink().saved[0];
        assert_eq!(filename, SNAPSHOT_FILENAME);
        assert!(contents.contains("w0 = 0.00, w1 = 1.00"));
    }
}
