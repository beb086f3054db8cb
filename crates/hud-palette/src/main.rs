use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod cli;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod sources;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction, PaletteAction, SourceAction};
use cli::Args;
use hud_config::AppConfig;
use hud_list_engine::ActionSource;
use middleware::{ActionSourceMiddleware, KeyboardMiddleware, LoggingMiddleware};
use sources::{ShellActionSource, StdinActionSource};
use state::AppState;
use store::Store;

/// The palette draws on stderr so stdout stays free for the chosen name.
type PaletteTerminal = Terminal<CrosstermBackend<Stderr>>;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = logger::init()?;
    log::info!("Starting hud-palette (log file: {})", log_file.display());

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(sort) = args.sort {
        config.sort = sort.into();
    }

    let stdin_source = args
        .stdin
        .then(|| Arc::new(StdinActionSource::new(io::stdin())));
    let source: Arc<dyn ActionSource> = match &stdin_source {
        Some(stdin_source) => Arc::clone(stdin_source) as Arc<dyn ActionSource>,
        None => Arc::new(ShellActionSource::new(&config, args.config.clone())),
    };

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::new(config));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(ActionSourceMiddleware::new(source)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, args.query);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    if let Some(name) = &store.state().executed {
        log::info!("Session ended after running '{}'", name);
    }
    log::info!("Exiting hud-palette");

    if let Some(stdin_source) = stdin_source {
        match stdin_source.chosen() {
            Some(name) => println!("{}", name),
            // dmenu convention: nothing chosen is a non-zero exit
            None => std::process::exit(1),
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut PaletteTerminal,
    store: &mut Store,
    initial_query: Option<String>,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize(Rect::new(
        0,
        0,
        size.width,
        size.height,
    ))));
    if let Some(query) = initial_query {
        store.dispatch(Action::Palette(PaletteAction::SetQuery(query)));
    }
    store.dispatch(Action::Source(SourceAction::Load));

    loop {
        // Pick up results from the command loader
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    store.dispatch(Action::Global(GlobalAction::MouseClicked {
                        column: mouse.column,
                        row: mouse.row,
                    }));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize(Rect::new(
                        0, 0, width, height,
                    ))));
                }
                _ => {}
            }
        }
    }

    Ok(())
}
