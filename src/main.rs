// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod events;
mod export;
mod source;
mod ui;

use app::App;
use data::RenderSnapshot;
use source::{DataSource, FileSource, ReadingBatch, StreamSource};

#[derive(Parser, Debug)]
#[command(name = "hydra-watch")]
#[command(about = "Realtime TUI dashboard for Hydra water-quality sensor readings")]
struct Args {
    /// Path to a JSON file holding the latest readings (newest first)
    #[arg(short, long, default_value = "readings.json", conflicts_with = "connect")]
    file: PathBuf,

    /// Connect to a TCP endpoint streaming reading batches (host:port)
    #[arg(short, long, conflicts_with = "file")]
    connect: Option<String>,

    /// Refresh interval in seconds (only used with --file)
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Directory CSV exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Export the current readings to CSV and exit
    #[arg(short, long, conflicts_with = "connect")]
    export: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr, filtered by RUST_LOG (silent by default)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Handle export mode (non-interactive)
    if args.export {
        return export_to_csv(&args.file, &args.export_dir);
    }

    // Handle TCP connection mode
    if let Some(ref addr) = args.connect {
        return run_with_tcp(addr, &args.export_dir);
    }

    // Default: file-based mode
    run_with_file(&args.file, &args.export_dir, Duration::from_secs(args.refresh))
}

/// Run with a file-based data source
fn run_with_file(path: &PathBuf, export_dir: &PathBuf, refresh: Duration) -> Result<()> {
    let source = Box::new(FileSource::new(path));
    run_tui(source, export_dir.clone(), refresh)
}

/// Run with a TCP stream data source
fn run_with_tcp(addr: &str, export_dir: &PathBuf) -> Result<()> {
    // Build a tokio runtime for the TCP connection
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt.block_on(async {
        use tokio::net::TcpStream;

        println!("Connecting to {}...", addr);
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                println!("Connected!");
                Ok(Box::new(StreamSource::spawn(stream, addr)) as Box<dyn DataSource>)
            }
            Err(e) => Err(anyhow::anyhow!("Failed to connect to {}: {}", addr, e)),
        }
    })?;

    // For TCP, we poll continuously (no refresh interval needed)
    run_tui(source, export_dir.clone(), Duration::from_millis(100))
}

/// Run the TUI with the given data source
fn run_tui(
    source: Box<dyn DataSource>,
    export_dir: PathBuf,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source);
    app.export_dir = export_dir;
    let _ = app.poll_feed();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 20;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(6), // Metric cards
                Constraint::Fill(3),   // Trend chart
                Constraint::Fill(2),   // History table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with feed state
            ui::common::render_header(frame, app, chunks[0]);

            // Fan out the snapshot to the three views; each render reads the
            // same snapshot and owns its own region
            ui::cards::render(frame, app, chunks[1]);
            ui::chart::render(frame, app, chunks[2]);
            ui::table::render(frame, app, chunks[3]);

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[4]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Poll the feed periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.poll_feed();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Export the readings file to CSV without entering the TUI
fn export_to_csv(readings_path: &std::path::Path, export_dir: &std::path::Path) -> Result<()> {
    let content = std::fs::read_to_string(readings_path)?;
    let batch: ReadingBatch = serde_json::from_str(&content)?;
    let snapshot = RenderSnapshot::from_batch(&batch);

    let rows = ui::table::history_rows(&snapshot);
    let path = export::write_csv(&rows, export_dir, chrono::Local::now().date_naive())?;

    println!("Exported {} readings to: {}", rows.len(), path.display());
    Ok(())
}
