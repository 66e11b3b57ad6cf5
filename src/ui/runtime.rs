use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::config::Config;
use crate::fetch::FetchController;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let client = ApiClient::new(config.api.base_url.clone());
    let controller = FetchController::new(client, runtime, events.sender());
    let mut app = App::new(
        controller,
        config.start_resource(),
        config.ui.page_size,
        config.api.base_url.clone(),
    );
    app.bootstrap();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchSettled { generation, result }) => {
                app.on_settled(generation, result);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
