//! Terminal front end: sliders, chart and readouts drawn with ratatui.

mod draw;
mod layout;
pub mod run;
mod theme;
pub mod view;
mod widgets;

pub use run::run;
pub use view::{Input, TerminalView};
