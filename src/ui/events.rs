//! UI event channel.
//!
//! A dedicated thread polls the terminal for input and forwards everything
//! over one mpsc channel; fetch tasks settle over the same channel. The
//! main loop owns the receiving end and is the only place state changes.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::api::ResultPage;

pub enum AppEvent {
    Input(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A fetch settled. The generation lets the reducer drop responses that
    /// were superseded while in flight.
    FetchSettled {
        generation: u64,
        result: Result<ResultPage, String>,
    },
}

pub struct EventHandler {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || input_loop(input_tx, tick_rate));
        Self { tx, rx }
    }

    /// A sender for out-of-thread producers (the fetch controller).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => AppEvent::Input(key),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(_) => break,
            },
            Ok(false) => AppEvent::Tick,
            Err(_) => break,
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}
