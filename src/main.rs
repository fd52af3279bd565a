use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use voyage::app::{r#loop::run_loop, runtime::Runtime, state::AppState};
use voyage::config::{get_config_dir, Config};
use voyage::infrastructure::http_lookup::HttpCityLookup;
use voyage::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let (config, config_problem) = Config::load();
    if let Some(dir) = get_config_dir() {
        logging::init(&dir.join("voyage.log"), &config.log_level);
    }
    if let Some(e) = config_problem {
        log::warn!("Using default config: {e:#}");
    }
    log::info!(
        "Starting voyage against {} (debounce {:?})",
        config.api_base_url,
        config.debounce()
    );

    // Built before terminal setup so a bad URL or TLS failure doesn't leave
    // the terminal in raw mode.
    let lookup = HttpCityLookup::new(&config.api_base_url, config.request_timeout())?;
    let (action_tx, action_rx) = mpsc::channel(100);
    let runtime = Runtime::new(
        AppState::new(&config),
        Arc::new(lookup),
        config.debounce(),
        action_tx,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, runtime, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Exited with error: {err:?}");
        println!("{err:?}");
    }

    Ok(())
}
