use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};
use ratatui::crossterm::event::{self, Event};

use super::App;
use super::actions::Refresh;
use super::builder::PickerUi;
use super::outcome::DialogOutcome;
use crate::items::ItemStore;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Show a dialog over `items` with default settings and wait for the result.
pub fn run(items: impl Into<ItemStore>) -> Result<DialogOutcome> {
    PickerUi::new(items).run()
}

impl<'a> App<'a> {
    /// Take over the terminal and pump events until the dialog closes.
    pub fn run(&mut self, initial_query: &str) -> Result<DialogOutcome> {
        let mut terminal = ratatui::init();
        let result = terminal
            .clear()
            .context("failed to clear the terminal")
            .and_then(|()| self.run_in(&mut terminal, initial_query));
        self.dialog.host_mut().restore_window_config();
        ratatui::restore();
        result
    }

    fn run_in(
        &mut self,
        terminal: &mut DefaultTerminal,
        initial_query: &str,
    ) -> Result<DialogOutcome> {
        self.open(initial_query)?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(POLL_INTERVAL)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let result = self.pump_events(terminal, &event_rx);

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Handle input events strictly in arrival order on this thread.
    ///
    /// A query edit ends the batch so the list is redrawn before any later
    /// tap is resolved against it.
    fn pump_events<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mpsc::Receiver<Event>,
    ) -> Result<DialogOutcome> {
        let mut pending = VecDeque::new();

        loop {
            loop {
                match events.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        return Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            terminal.draw(|frame| self.draw(frame))?;

            while let Some(event) = pending.pop_front() {
                let refresh = self.handle_event(event)?;
                if refresh == Refresh::Content || self.is_closed() {
                    break;
                }
            }

            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }

            thread::sleep(FRAME_INTERVAL);
        }
    }
}
