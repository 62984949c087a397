use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use lapwatch::app::App;
use lapwatch::cli::Args;
use lapwatch::config::{ConfigResult, load_config};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    init_debug_logging();

    let ConfigResult { config, warning } = load_config(args.config.as_deref());

    let mut app = App::new(&config);
    if args.no_stats {
        app.show_stats = false;
    }
    app.status_message = warning;
    if args.start {
        app.engine.start();
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal before reporting any error
    ratatui::restore();

    result
}

// Logging is only active in debug builds
#[cfg(debug_assertions)]
fn init_debug_logging() {
    if let Err(e) = lapwatch::logging::init() {
        eprintln!("lapwatch: debug logging disabled: {}", e);
    }
}

#[cfg(not(debug_assertions))]
fn init_debug_logging() {}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
