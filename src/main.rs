mod app;
mod domain;
mod input;
mod persistence;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{display_key, sort_bucket_keys};
use persistence::{init_local_tally, migrate_legacy, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A minimal terminal task list with a daily stopwatch and dated archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tally directory in the current directory
    Init,
    /// Print archived task buckets and timer history, most recent first
    History,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let tally_dir = init_local_tally()?;
            println!("Initialized tally directory: {}", tally_dir.display());
            println!();
            println!("Tally will now use this local directory for task storage.");
            println!("Run 'tally' to start tracking.");
            Ok(())
        }
        Some(Commands::History) => print_history(),
        None => run_tui(),
    }
}

fn print_history() -> Result<()> {
    let store = Store::open_default()?;
    migrate_legacy(&store);
    let data = store.load()?;

    let mut keys: Vec<String> = data.completed.keys().cloned().collect();
    sort_bucket_keys(&mut keys);

    if keys.is_empty() {
        println!("Nothing archived yet.");
        return Ok(());
    }

    for key in keys {
        println!("{}", display_key(&key));
        if let Some(record) = data.time_records.get(&key) {
            println!("  timer: {}", record.formatted_time);
        }
        if let Some(tasks) = data.completed.get(&key) {
            for task in tasks {
                let mark = if task.completed { "x" } else { " " };
                println!("  [{}] {}", mark, task.text);
                if task.has_note() {
                    println!("      {}", task.note);
                }
            }
        }
        println!();
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let store = Store::open_default()?;
    eprintln!("Using tally directory: {}", store.root().display());

    let mut app = AppState::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Final persist of the timer before teardown, same as an unload hook
    if let Err(e) = app.persist_elapsed() {
        eprintln!("Error saving timer state: {}", e);
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Sample and persist the running timer
        app.tick()?;
    }
}
