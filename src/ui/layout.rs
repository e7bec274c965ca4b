use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub intercept: Rect,
    pub slope: Rect,
    pub chart: Rect,
    pub footer: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        intercept: chunks[1],
        slope: chunks[2],
        chart: chunks[3],
        footer: chunks[4],
    }
}

pub fn centered(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
