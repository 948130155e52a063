// folio-contact - terminal contact form for the portfolio site
mod app;
mod event;
mod ui;

use app::App;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::EventHandler;
use folio_contact::config::{self, Config, Environment};
use folio_contact::logger;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How the active configuration was requested on the command line
enum ConfigSource {
    File(PathBuf),
    Preset(Environment),
    Default,
}

fn parse_args() -> Result<ConfigSource, String> {
    let mut args = std::env::args().skip(1);
    let mut source = ConfigSource::Default;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config needs a file path")?;
                source = ConfigSource::File(PathBuf::from(path));
            }
            "--env" | "-e" => {
                let name = args.next().ok_or("--env needs an environment name")?;
                if !matches!(source, ConfigSource::File(_)) {
                    source = ConfigSource::Preset(name.parse().map_err(|e| format!("{}", e))?);
                }
            }
            "--help" | "-h" => {
                return Err("usage: folio-contact [--env development|staging|production] [--config FILE]".into());
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(source)
}

/// Resolve the config: explicit file, then preset, then the saved file, then production
fn resolve_config(source: ConfigSource) -> Result<Config, String> {
    match source {
        ConfigSource::File(path) => config::load_config(&path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e)),
        ConfigSource::Preset(env) => Ok(Config::for_environment(env)),
        ConfigSource::Default => {
            let saved = config::default_config_path()
                .ok()
                .filter(|p| p.exists())
                .and_then(|p| match config::load_config(&p) {
                    Ok(cfg) => Some(cfg),
                    Err(e) => {
                        logger::log_to_file(&format!("Ignoring saved config {}: {}", p.display(), e));
                        None
                    }
                });
            Ok(saved.unwrap_or_else(Config::production))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = match parse_args() {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };

    // Initialize logger (no console output)
    let data_dir = config::get_app_data_dir()?;
    logger::init_logger(&data_dir)?;

    let config = match resolve_config(source) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if config.is_development() {
        logger::log_to_file("Development environment loaded");
    }
    if config.enable_debug_mode {
        logger::log_to_file(&format!("API endpoint: {}", config.contact_api_url));
        logger::log_to_file(&format!("Config: {:?}", config));
    }

    // Setup event handler first (the app needs its sender)
    let mut event_handler = EventHandler::new();
    let mut app = App::initialize(config, event_handler.sender());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    // Try keyboard enhancements (modern terminals only)
    let keyboard_enhancements_supported = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    if !keyboard_enhancements_supported {
        logger::log_to_file("Keyboard enhancements not supported, using fallback keys (Ctrl+J for newline)");
    }

    app.keyboard_enhancements_supported = keyboard_enhancements_supported;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    event_handler.spawn_keyboard_listener();
    event_handler.spawn_tick_timer(Duration::from_millis(250));

    // Main event loop
    let result = run_app(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        PopKeyboardEnhancementFlags
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        logger::log_to_file(&format!("Error: {:?}", err));
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> io::Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            render_ui(f, app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next().await {
            app.handle_event(event);
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn render_ui(f: &mut ratatui::Frame, app: &App) {
    use ratatui::layout::{Constraint, Direction, Layout};

    let banner_height = if app.config.is_development() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Dev banner
            Constraint::Length(2),             // Notification
            Constraint::Min(0),                // Form
            Constraint::Length(2),             // Hints
        ])
        .split(f.area());

    if app.config.is_development() {
        ui::render_dev_banner(f, chunks[0]);
    }
    ui::render_notification(f, app, chunks[1]);
    ui::render_form(f, app, chunks[2]);
    ui::render_hints(f, app, chunks[3]);
}
