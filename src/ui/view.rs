use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{UiEvent, View};
use crate::model::{ModelParameters, Parameter};
use crate::presentation::{ChartAxes, ChartSeries, ViewModel};

/// What a key press turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    None,
    Quit,
    Event(UiEvent),
}

/// Last frame handed over by the controller, plus local UI state.
#[derive(Debug, Clone)]
pub struct TerminalView {
    pub selected: Parameter,
    pub params: ModelParameters,
    pub intercept_label: String,
    pub slope_label: String,
    pub mse_label: String,
    pub points: usize,
    pub series: ChartSeries,
    pub axes: ChartAxes,
    pub notice: Option<String>,
    pub status: Option<String>,
}

impl TerminalView {
    pub fn new(axes: ChartAxes) -> Self {
        Self {
            selected: Parameter::Intercept,
            params: ModelParameters::default(),
            intercept_label: String::new(),
            slope_label: String::new(),
            mse_label: String::new(),
            points: 0,
            series: ChartSeries::default(),
            axes,
            notice: None,
            status: None,
        }
    }

    /// Closes an open notice. Returns whether there was one, in which case the
    /// key press that closed it is consumed.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Input {
        let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = self.selected.toggle();
                Input::None
            }
            KeyCode::Left | KeyCode::Char('h') => self.slide(-steps),
            KeyCode::Right | KeyCode::Char('l') => self.slide(steps),
            KeyCode::Char('n') => Input::Event(UiEvent::Regenerate),
            KeyCode::Char('e') => Input::Event(UiEvent::ExportRequested),
            KeyCode::Char('s') => Input::Event(UiEvent::SnapshotRequested),
            KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
            _ => Input::None,
        }
    }

    fn slide(&self, steps: i32) -> Input {
        let parameter = self.selected;
        let value = parameter
            .slider()
            .offset(parameter.get(&self.params), steps);

        Input::Event(UiEvent::ParameterChanged(parameter, value))
    }
}

impl View for TerminalView {
    fn render(&mut self, view: &ViewModel<'_>) {
        self.params = view.params;
        self.intercept_label = view.intercept_label();
        self.slope_label = view.slope_label();
        self.mse_label = view.mse_label();
        self.points = view.points;
        self.series.clone_from(view.series);
        self.axes.clone_from(view.axes);
        self.status = None;
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_owned());
    }

    fn status(&mut self, message: &str) {
        self.status = Some(message.to_owned());
    }
}
