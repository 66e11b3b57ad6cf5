use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::Resource;
use crate::query::{page_window, Tab};
use crate::search;
use crate::ui::app::{App, InputMode};
use crate::ui::browse::LoadPhase;
use crate::ui::layout::layout_regions;
use crate::ui::table::data_table;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    draw_header(frame, app, regions.header);
    draw_tabs(frame, app, regions.tabs);
    draw_filters(frame, app, regions.filters);
    draw_body(frame, app, regions.body);
    draw_status(frame, app, regions.status);
    draw_pagination(frame, app, regions.pagination);
    draw_footer(frame, regions.footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![
        Span::styled("  datadeck", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
    ];
    for (index, resource) in Resource::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", text_style));
        }
        let style = if resource == app.browse().resource {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        spans.push(Span::styled(resource.title(), style));
    }
    spans.push(Span::styled("  │  ", separator_style));
    spans.push(Span::styled(app.base_url().to_string(), Style::default().fg(DIM_TEXT)));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if app.browse().resource.category_axis().is_none() {
        return;
    }
    let mut spans = vec![Span::raw("  ")];
    for (index, tab) in Tab::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)));
        }
        let style = if tab == app.browse().query.tab {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_filters(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let browse = app.browse();
    let mut spans = vec![Span::styled("  Filter: ", Style::default().fg(DIM_TEXT))];

    for (slot, field) in browse.resource.filter_fields().iter().enumerate() {
        if slot > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
        }
        let value = browse
            .query
            .filter
            .as_ref()
            .filter(|f| f.field == field.key)
            .map(|f| f.value.as_str())
            .unwrap_or("");
        let selected = slot == app.filter_slot();
        let editing = selected && app.mode() == InputMode::Filter;
        let mut style = Style::default().fg(if selected { HEADER_TEXT } else { DIM_TEXT });
        if selected {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        if editing {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let text = if value.is_empty() {
            field.label.to_string()
        } else {
            format!("{}: {}", field.label, value)
        };
        spans.push(Span::styled(text, style));
    }

    if app.search_open() {
        spans.push(Span::styled("   │   ", Style::default().fg(HEADER_SEPARATOR)));
        let style = if app.mode() == InputMode::Search {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(
            format!("Search: {}", browse.query.search),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let browse = app.browse();
    match &browse.phase {
        LoadPhase::Failed(message) => {
            let widget = Paragraph::new(Line::from(vec![Span::styled(
                format!("Error: {}", message),
                Style::default().fg(STATUS_ERROR),
            )]))
            .alignment(Alignment::Center);
            frame.render_widget(widget, area);
        }
        LoadPhase::Loading => {
            let widget = Paragraph::new(Span::styled(
                "Loading...",
                Style::default().fg(DIM_TEXT),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(widget, area);
        }
        LoadPhase::Idle | LoadPhase::Ready => {
            let visible = search::overlay(&browse.items, &browse.query.search);
            frame.render_widget(data_table(browse.resource, &visible), area);
        }
    }
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let browse = app.browse();
    let shown = search::overlay(&browse.items, &browse.query.search).len();
    let mut text = format!(
        "  Total: {} {} │ Page {}/{} │ Size {}",
        browse.total,
        browse.resource.item_key(),
        browse.query.page,
        browse.total_pages().max(1),
        browse.query.page_size.as_u64(),
    );
    if !browse.query.search.is_empty() {
        text.push_str(&format!(" │ {}/{} shown", shown, browse.items.len()));
    }
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(DIM_TEXT))),
        area,
    );
}

fn draw_pagination(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let browse = app.browse();
    // Hidden on a single page and while the table itself is suppressed.
    if browse.total_pages() <= 1 || !matches!(browse.phase, LoadPhase::Ready) {
        return;
    }

    let current = browse.query.page;
    let window = page_window(current, browse.total_pages());
    let plain = Style::default().fg(HEADER_TEXT);
    let dim = Style::default().fg(DIM_TEXT);

    let mut spans = Vec::new();
    spans.push(Span::styled(
        "‹ Prev  ",
        if current == 1 { dim } else { plain },
    ));
    if window.first_anchor {
        spans.push(Span::styled("1  ", plain));
    }
    if window.leading_gap {
        spans.push(Span::styled("…  ", dim));
    }
    for page in &window.pages {
        let style = if *page == current {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            plain
        };
        spans.push(Span::styled(format!("{}  ", page), style));
    }
    if window.trailing_gap {
        spans.push(Span::styled("…  ", dim));
    }
    if window.last_anchor {
        spans.push(Span::styled(format!("{}  ", browse.total_pages()), plain));
    }
    spans.push(Span::styled(
        "Next ›",
        if current == browse.total_pages() { dim } else { plain },
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints =
        " u/p: Collection │ ←/→: Page │ g/G: First/Last │ s: Size │ ↑/↓: Field │ f: Filter │ x: Clear │ t: Tab │ /: Search │ q: Quit";
    let version = format!("v{} ", VERSION);

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}
