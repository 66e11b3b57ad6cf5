use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::Resource;
use crate::query::Tab;
use crate::ui::app::{App, InputMode};
use crate::ui::browse::BrowseIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.mode() {
        InputMode::Filter => handle_filter_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_mode(InputMode::Normal),
        KeyCode::Backspace => {
            let mut value = app.filter_text();
            value.pop();
            dispatch_filter(app, value);
        }
        KeyCode::Char(ch) => {
            let mut value = app.filter_text();
            value.push(ch);
            dispatch_filter(app, value);
        }
        _ => {}
    }
}

fn dispatch_filter(app: &mut App, value: String) {
    let field = app.selected_field().to_string();
    app.dispatch(BrowseIntent::SetFilter { field, value });
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_mode(InputMode::Normal),
        KeyCode::Backspace => {
            let mut text = app.browse().query.search.clone();
            text.pop();
            app.dispatch(BrowseIntent::SetSearch(text));
        }
        KeyCode::Char(ch) => {
            let mut text = app.browse().query.search.clone();
            text.push(ch);
            app.dispatch(BrowseIntent::SetSearch(text));
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    let page = app.browse().query.page;
    let last = app.browse().total_pages();

    match key.code {
        KeyCode::Char('q') => app.request_quit(),

        KeyCode::Char('u') => app.dispatch(BrowseIntent::SwitchResource(Resource::Users)),
        KeyCode::Char('p') => app.dispatch(BrowseIntent::SwitchResource(Resource::Products)),

        KeyCode::Left | KeyCode::Char('h') => {
            app.dispatch(BrowseIntent::SetPage(page.saturating_sub(1)));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.dispatch(BrowseIntent::SetPage(page + 1));
        }
        KeyCode::Home | KeyCode::Char('g') => app.dispatch(BrowseIntent::SetPage(1)),
        KeyCode::End | KeyCode::Char('G') => app.dispatch(BrowseIntent::SetPage(last)),

        KeyCode::Char('s') => {
            let next = app.browse().query.page_size.next();
            app.dispatch(BrowseIntent::SetPageSize(next));
        }

        KeyCode::Up => app.move_filter_slot(-1),
        KeyCode::Down => app.move_filter_slot(1),
        KeyCode::Char('f') | KeyCode::Enter => app.set_mode(InputMode::Filter),
        KeyCode::Char('x') => app.dispatch(BrowseIntent::ClearFilter),

        KeyCode::Char('t') => {
            let next = match app.browse().query.tab {
                Tab::All => Tab::Laptops,
                Tab::Laptops => Tab::All,
            };
            app.dispatch(BrowseIntent::SetTab(next));
        }

        KeyCode::Char('/') => {
            app.set_search_open(true);
            app.set_mode(InputMode::Search);
        }
        KeyCode::Esc => {
            if app.search_open() {
                app.dispatch(BrowseIntent::SetSearch(String::new()));
                app.set_search_open(false);
            }
        }

        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
