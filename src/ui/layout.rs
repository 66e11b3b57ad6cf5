use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed vertical regions of the screen, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub tabs: Rect,
    pub filters: Rect,
    pub body: Rect,
    pub status: Rect,
    pub pagination: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        tabs: chunks[1],
        filters: chunks[2],
        body: chunks[3],
        status: chunks[4],
        pagination: chunks[5],
        footer: chunks[6],
    }
}
