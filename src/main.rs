//! # SymbolDrop CLI Entry Point
//!
//! Browse the system icon symbol catalog in the terminal and copy symbols as
//! a glyph, a name or a SwiftUI snippet.
//!
//! ## Usage
//!
//! ```bash
//! # Open the browser
//! symboldrop
//!
//! # Start in a category with a search already typed
//! symboldrop --category weather --search cloud
//!
//! # Print matching symbols and exit
//! symboldrop --list --search arrow
//!
//! # Copy one symbol without opening the browser
//! symboldrop --copy star.fill --format code-snippet
//! ```
//!
//! ## Key Bindings
//!
//! ### Symbol grid
//! - `h` `j` `k` `l` / arrows - Move selection
//! - `Enter` - Copy in the active format
//! - `n` - Copy the symbol name
//! - `f` - Toggle favorite
//! - `r` - Related symbols
//! - `c` - Choose the copy format (`C` cycles it)
//!
//! ### Anywhere
//! - `/` - Search (`Esc` to leave)
//! - `Tab` - Switch between categories and grid
//! - `t` - Next theme
//! - `i` - Show/hide help
//! - `q` - Quit
//!
//! ## Logging
//!
//! The terminal belongs to the UI, so the interactive browser only logs when
//! `--log-file` is given. `--list` and `--copy` log to stderr.

use symboldrop::browser::{CopyFormat, SymbolBrowser};
use symboldrop::catalog::{Category, GlyphTable, SymbolCatalog};
use symboldrop::clipboard::SystemClipboard;
use symboldrop::prefs::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
use symboldrop::ui::app::Status;
use symboldrop::ui::config::Config;
use symboldrop::ui::input::{self, Effect};
use symboldrop::ui::layout::AppLayout;
use symboldrop::ui::theme::Theme;
use symboldrop::ui::{self, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Poll timeout while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// SymbolDrop - search, favorite and copy system icon symbols
#[derive(Parser, Debug)]
#[command(name = "symboldrop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and copy system icon symbols from the terminal", long_about = None)]
struct Args {
    /// Category to start in (e.g. "weather", "Objects & Tools", "favorites")
    #[arg(short, long, value_name = "NAME")]
    category: Option<String>,

    /// Initial search text
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// JSON file of [name, glyph] pairs replacing the bundled glyphs
    #[arg(short, long, value_name = "FILE")]
    glyphs: Option<PathBuf>,

    /// Print the matching symbols and exit
    #[arg(short, long, conflicts_with = "copy")]
    list: bool,

    /// Copy one symbol to the clipboard and exit
    #[arg(long, value_name = "NAME")]
    copy: Option<String>,

    /// Copy format for --copy (unicode, symbol-name, code-snippet)
    #[arg(short, long, value_name = "FORMAT", requires = "copy")]
    format: Option<String>,

    /// Always copy through the terminal (OSC 52), e.g. over SSH
    #[arg(long)]
    osc52: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn interactive(&self) -> bool {
        !self.list && self.copy.is_none()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Drop the terminal-restoring hook; later panics use the default one
    let _ = panic::take_hook();

    result
}

fn init_logging(args: &Args) -> Result<()> {
    let subscriber = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            create_subscriber(args.verbose, BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if !args.interactive() => {
            create_subscriber(args.verbose, BoxMakeWriter::new(io::stderr), true)
        }
        None => return Ok(()),
    };

    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")
}

fn create_subscriber(
    verbose: bool,
    writer: BoxMakeWriter,
    ansi: bool,
) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    Box::new(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false)
            .finish(),
    )
}

async fn run_application(args: Args) -> Result<()> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;
    let format = args
        .format
        .as_deref()
        .map(str::parse::<CopyFormat>)
        .transpose()?;

    let mut config = Config::load();

    let glyphs = match args.glyphs.as_ref().or(config.glyph_file.as_ref()) {
        Some(path) => GlyphTable::from_file(path),
        None => GlyphTable::bundled(),
    };

    let store: Box<dyn PreferenceStore> = match JsonPreferenceStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            eprintln!("Warning: Preferences will not be saved: {:#}", e);
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let clipboard = if args.osc52 {
        SystemClipboard::osc52()
    } else {
        SystemClipboard::detect()
    };

    let mut browser = SymbolBrowser::new(
        SymbolCatalog::bundled(),
        glyphs,
        store,
        Box::new(clipboard),
    );
    if let Some(category) = category {
        browser.select_category(category);
    }
    if let Some(search) = args.search {
        browser.set_search_text(search);
    }

    if args.list {
        print_symbols(&browser);
        return Ok(());
    }

    if let Some(name) = args.copy {
        let symbol = browser
            .catalog()
            .get(&name)
            .cloned()
            .with_context(|| format!("Unknown symbol: {}", name))?;
        let format = format.unwrap_or_else(|| browser.copy_format());
        browser.copy_as(&symbol, format)?;
        info!(symbol = %symbol.name, format = format.id(), "copied");
        println!("{}", format.render(&symbol, browser.glyphs()));
        return Ok(());
    }

    let theme = match Theme::by_name(&config.theme) {
        Some(theme) => theme,
        None => {
            eprintln!("Warning: Unknown theme '{}', using default", config.theme);
            Theme::default_theme()
        }
    };
    let config_file = Config::default_path()
        .inspect_err(|e| eprintln!("Warning: Theme changes will not be saved: {:#}", e))
        .ok();

    let mut app = App::new(browser, theme.clone());
    app.schedule_search_focus(Instant::now());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut config,
        config_file.as_deref(),
        &mut event_reader,
    )
    .await;

    // Always restore the terminal, even if the app loop failed
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

fn print_symbols(browser: &SymbolBrowser) {
    for symbol in browser.filtered_symbols() {
        let glyph = browser.glyphs().glyph(&symbol.name).unwrap_or(" ");
        println!("{}\t{}\t{}", glyph, symbol.name, symbol.category.label());
    }
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &mut Config,
    config_file: Option<&Path>,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height));
        app.set_grid_viewport(layout.grid_columns(), layout.grid_rows());
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Wake up in time for the next copied-marker clear
        let timeout = app.browser.next_clear().map_or(IDLE_POLL, |due| {
            due.saturating_duration_since(Instant::now()).min(IDLE_POLL)
        });
        let Some(event) = event_reader.read_event(timeout)? else {
            continue;
        };

        match event {
            Event::Key(key) => {
                if input::handle_key(app, key) == Effect::ThemeChanged {
                    save_theme(app, config, config_file);
                }
            }
            Event::Mouse(mouse) => input::handle_mouse(app, &layout, mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn save_theme(app: &mut App, config: &mut Config, config_file: Option<&Path>) {
    config.theme = app.theme.name.to_string();
    let Some(path) = config_file else {
        return;
    };
    if let Err(e) = config.save_to(path) {
        warn!("Failed to save theme: {:#}", e);
        app.status = Some(Status::Error(format!("Failed to save theme: {:#}", e)));
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;
    use symboldrop::catalog::Symbol;
    use symboldrop::clipboard::MemoryClipboard;
    use tempfile::TempDir;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app(clipboard: MemoryClipboard) -> App {
        let catalog = SymbolCatalog::from_symbols(vec![
            Symbol::new("star", Category::General),
            Symbol::new("star.fill", Category::General),
            Symbol::new("heart", Category::Health),
        ]);
        let browser = SymbolBrowser::new(
            catalog,
            GlyphTable::empty(),
            Box::new(MemoryPreferenceStore::new()),
            Box::new(clipboard),
        );
        App::new(browser, Theme::default_theme().clone())
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('a')),
            key_event(KeyCode::Enter),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::try_parse_from(["symboldrop"]).unwrap();
        assert!(args.interactive());
        assert_eq!(args.category, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_parsing_copy_with_format() {
        let args = Args::try_parse_from([
            "symboldrop",
            "--copy",
            "star.fill",
            "--format",
            "code-snippet",
        ])
        .unwrap();
        assert!(!args.interactive());
        assert_eq!(args.copy.as_deref(), Some("star.fill"));
        assert_eq!(args.format.as_deref(), Some("code-snippet"));
    }

    #[test]
    fn test_args_format_requires_copy() {
        assert!(Args::try_parse_from(["symboldrop", "--format", "unicode"]).is_err());
    }

    #[test]
    fn test_args_list_conflicts_with_copy() {
        assert!(Args::try_parse_from(["symboldrop", "--list", "--copy", "star"]).is_err());
    }

    #[tokio::test]
    async fn test_run_application_unknown_category() {
        let args = Args::try_parse_from(["symboldrop", "--category", "nonexistent"]).unwrap();
        let result = run_application(args).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_application_unknown_format() {
        let args =
            Args::try_parse_from(["symboldrop", "--copy", "star", "--format", "png"]).unwrap();
        let result = run_application(args).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_app_quits_on_q() {
        let clipboard = MemoryClipboard::new();
        let mut app = test_app(clipboard.clone());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('l')),
            key_event(KeyCode::Enter),
            key_event(KeyCode::Char('q')),
        ]);

        run_app(&mut terminal, &mut app, &mut Config::default(), None, &mut reader)
            .await
            .unwrap();

        assert!(app.should_quit);
        assert_eq!(clipboard.text().as_deref(), Some("star.fill"));
        assert_eq!(app.grid_columns(), 4);
    }

    #[tokio::test]
    async fn test_run_app_saves_theme() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let mut app = test_app(MemoryClipboard::new());
        let mut config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('t')),
            key_event(KeyCode::Char('q')),
        ]);

        run_app(
            &mut terminal,
            &mut app,
            &mut config,
            Some(&config_path),
            &mut reader,
        )
        .await
        .unwrap();

        let saved = Config::load_from(&config_path).unwrap();
        assert_eq!(saved.theme, "Catppuccin Macchiato");
        assert_eq!(config.theme, "Catppuccin Macchiato");
    }
}
