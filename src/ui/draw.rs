use ratatui::{widgets::Block, widgets::Clear, Frame};

use crate::model::Parameter;

use super::{layout, theme::Theme, view::TerminalView, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &TerminalView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::regions(area);

    f.render_widget(widgets::header(view), regions.header);
    f.render_widget(widgets::slider(view, Parameter::Intercept), regions.intercept);
    f.render_widget(widgets::slider(view, Parameter::Slope), regions.slope);
    f.render_widget(widgets::chart(view), regions.chart);
    f.render_widget(widgets::footer(view), regions.footer);

    if let Some(notice) = &view.notice {
        let popup = layout::centered(40, 4, area);

        f.render_widget(Clear, popup);
        f.render_widget(widgets::notice(notice), popup);
    }
}
