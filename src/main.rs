use osint_map::config::{load_config, CliArgs};
use osint_map::{actions, event, export, logging, navigation, ui, AppState, Catalog};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init(config.log_file.as_deref())?;

    let catalog = Catalog::load_file(&config.catalog_file);
    let mut app = AppState::with_catalog(config, catalog);

    if let Some(ref path) = args.export_svg {
        return export_headless(&mut app, args.path.as_deref(), path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    let size = terminal.size()?;
    actions::execute_action(
        actions::Action::Resize {
            width: size.width,
            height: size.height,
        },
        &mut app,
    )?;
    match args.path {
        Some(ref path) => navigation::reveal_path(&mut app, path),
        None => navigation::show_default(&mut app),
    };

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        tracing::error!(error = %err, "main loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Lays the map out on a fixed virtual screen and writes it as SVG.
fn export_headless(app: &mut AppState, path: Option<&str>, out: &std::path::Path) -> Result<()> {
    actions::resize(app, 160, 48);
    let shown = match path {
        Some(path) => navigation::reveal_path(app, path),
        None => navigation::show_default(app),
    };
    if !shown {
        anyhow::bail!(
            "{}",
            app.notice.as_deref().unwrap_or("Nothing to export")
        );
    }
    app.recenter();

    export::write_svg(&app.session, out)
        .with_context(|| format!("Failed to export {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app, POLL_INTERVAL)? {
            tracing::trace!(?action, "action");
            if let Err(e) = actions::execute_action(action, app) {
                tracing::warn!(error = %e, "action failed");
                app.set_message(format!("Error: {}", e));
            }
        }

        // Deferred recenters and message expiry
        app.tick(Instant::now());
    }

    Ok(())
}
