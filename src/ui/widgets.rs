use ratatui::{
    layout::Alignment,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Wrap},
};

use crate::model::Parameter;
use crate::presentation::ChartAxes;

use super::theme::Theme;
use super::view::TerminalView;

pub fn header(view: &TerminalView) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled("Linear regression playground", Theme::title()),
        Span::raw("  |  "),
        Span::raw("MSE: "),
        Span::styled(view.mse_label.as_str(), Theme::model()),
        Span::raw("  |  "),
        Span::raw(format!("points: {}", view.points)),
    ]);

    Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Overview"))
}

pub fn slider(view: &TerminalView, parameter: Parameter) -> Gauge<'_> {
    let focused = view.selected == parameter;
    let range = parameter.slider();

    let label = match parameter {
        Parameter::Intercept => view.intercept_label.as_str(),
        Parameter::Slope => view.slope_label.as_str(),
    };

    let title = format!(
        "{} [{:.0} .. {:.0}]",
        parameter.name(),
        range.min,
        range.max
    );

    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border(focused))
                .title(title),
        )
        .gauge_style(Theme::slider(focused))
        .ratio(range.ratio(parameter.get(&view.params)))
        .label(label)
}

pub fn chart(view: &TerminalView) -> Chart<'_> {
    let datasets = vec![
        Dataset::default()
            .name("Data")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::data())
            .data(&view.series.data),
        Dataset::default()
            .name("Model")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::model())
            .data(&view.series.model),
    ];

    let ChartAxes { x, y, .. } = &view.axes;

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Fit"))
        .x_axis(
            Axis::default()
                .title("x")
                .style(Theme::muted())
                .bounds([x.start, x.end])
                .labels(axis_labels(x.start, x.end)),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(Theme::muted())
                .bounds([y.start, y.end])
                .labels(axis_labels(y.start, y.end)),
        )
}

fn axis_labels(start: f64, end: f64) -> Vec<Span<'static>> {
    [start, (start + end) / 2., end]
        .into_iter()
        .map(|v| Span::raw(format!("{v:.1}")))
        .collect()
}

pub fn footer(view: &TerminalView) -> Paragraph<'_> {
    let mut spans = vec![
        Span::styled("↑↓", Theme::title()),
        Span::styled(" select  ", Theme::muted()),
        Span::styled("←→", Theme::title()),
        Span::styled(" adjust (shift: x10)  ", Theme::muted()),
        Span::styled("n", Theme::title()),
        Span::styled(" new problem  ", Theme::muted()),
        Span::styled("e", Theme::title()),
        Span::styled(" export csv  ", Theme::muted()),
        Span::styled("s", Theme::title()),
        Span::styled(" snapshot svg  ", Theme::muted()),
        Span::styled("q", Theme::title()),
        Span::styled(" quit", Theme::muted()),
    ];

    if let Some(status) = &view.status {
        spans.push(Span::raw("  |  "));
        spans.push(Span::raw(status.as_str()));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

pub fn notice(message: &str) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled(message, Theme::notice())),
        Line::from(Span::styled("press any key", Theme::muted())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::notice())
            .title("Notice"),
    )
}
