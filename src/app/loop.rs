use crate::app::{action::Action, input::map_event_to_actions, runtime::Runtime, ui};
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

enum Incoming {
    Tick,
    Terminal(std::io::Result<Event>),
    Async(Action),
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: Runtime,
    action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, runtime, action_rx, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut runtime: Runtime,
    mut action_rx: mpsc::Receiver<Action>,
    mut event_rx: mpsc::Receiver<std::io::Result<Event>>,
) -> Result<()> {
    let theme = Theme::default();
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut runtime.state, &theme);
        })?;

        // --- 2. Wait for the next thing to happen ---
        let incoming = tokio::select! {
            _ = interval.tick() => Incoming::Tick,
            Some(res) = event_rx.recv() => Incoming::Terminal(res),
            Some(action) = action_rx.recv() => Incoming::Async(action),
        };

        // --- 3. Update (reducer + commands) ---
        let actions = match incoming {
            Incoming::Tick => vec![Action::Tick],
            Incoming::Terminal(res) => map_event_to_actions(res?, &runtime.state),
            Incoming::Async(action) => vec![action],
        };

        for action in actions {
            runtime.dispatch(action);
            if runtime.state.should_quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
