//! Floor Desk - terminal front end for the floor-plan booking core
//!
//! Renders the table map, occupancy statistics and the time-slot selector,
//! and translates key presses into [`FloorIntent`]s. The desk holds no
//! model state of its own: after every intent it re-reads the
//! [`FloorSnapshot`] returned by the manager.
//!
//! Run: cargo run -p floor-desk

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use floor_core::{FloorIntent, FloorManager, FloorSnapshot, TableCatalog, TimeSlots};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table as TableWidget};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

#[derive(Parser, Debug)]
#[command(name = "floor-desk", about = "Restaurant floor-plan booking desk")]
struct Args {
    /// Catalog JSON file; the built-in floor is used when omitted
    #[arg(long, env = "FLOOR_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log level filter (e.g. "info", "floor_core=debug")
    #[arg(long, default_value = "info", env = "FLOOR_LOG")]
    log_level: String,
}

struct App {
    manager: FloorManager,
    snapshot: FloorSnapshot,
    /// Digits typed so far for a table-id toggle
    pending_id: String,
    logger_state: TuiWidgetState,
}

impl App {
    fn new(manager: FloorManager) -> Self {
        let snapshot = manager.snapshot();
        Self {
            manager,
            snapshot,
            pending_id: String::new(),
            logger_state: TuiWidgetState::new(),
        }
    }

    fn apply(&mut self, intent: FloorIntent) {
        self.snapshot = self.manager.apply(intent);
    }

    /// `a` steps None -> first area -> ... -> last area -> None
    fn cycle_area(&mut self) {
        let areas = self.snapshot.areas.clone();
        if areas.is_empty() {
            return;
        }
        let next = match &self.snapshot.selected_area {
            None => Some(areas[0].clone()),
            Some(current) => areas
                .iter()
                .position(|a| a == current)
                .and_then(|i| areas.get(i + 1))
                .cloned(),
        };
        self.apply(FloorIntent::SelectArea { area: next });
    }

    fn commit_pending_toggle(&mut self) {
        if let Ok(table_id) = self.pending_id.parse() {
            self.apply(FloorIntent::ToggleTable { table_id });
        }
        self.pending_id.clear();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Route tracing through the in-app log pane
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let catalog = match &args.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog file");
            TableCatalog::from_json_file(path)?
        }
        None => {
            tracing::debug!("no catalog file given, using the built-in floor");
            TableCatalog::default_floor()
        }
    };
    let manager = FloorManager::new(catalog, TimeSlots::evening());
    let mut app = App::new(manager);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => {
                tracing::debug!("closing floor desk");
                return Ok(());
            }
            KeyCode::Left => app.apply(FloorIntent::PreviousSlot),
            KeyCode::Right => app.apply(FloorIntent::NextSlot),
            KeyCode::Char('a') => app.cycle_area(),
            KeyCode::Char('c') => app.apply(FloorIntent::SelectArea { area: None }),
            KeyCode::Char(c) if c.is_ascii_digit() => app.pending_id.push(c),
            KeyCode::Backspace => {
                app.pending_id.pop();
            }
            KeyCode::Enter => app.commit_pending_toggle(),
            KeyCode::Esc => app.pending_id.clear(),
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // time slot selector
            Constraint::Length(3), // area filter bar + stats
            Constraint::Min(8),    // table map
            Constraint::Length(3), // key help / pending input
            Constraint::Length(8), // log pane
        ])
        .split(frame.area());

    draw_slot_selector(frame, chunks[0], app);
    draw_filter_and_stats(frame, chunks[1], app);
    draw_table_map(frame, chunks[2], app);
    draw_help(frame, chunks[3], app);
    draw_logs(frame, chunks[4], app);
}

fn draw_slot_selector(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;
    let prev = if snapshot.can_go_previous { "◀" } else { " " };
    let next = if snapshot.can_go_next { "▶" } else { " " };
    let line = Line::from(vec![
        Span::styled(format!(" {prev} "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            snapshot.slot_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {next} "), Style::default().fg(Color::DarkGray)),
    ]);
    let widget = Paragraph::new(line)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" Time Slot "));
    frame.render_widget(widget, area);
}

fn draw_filter_and_stats(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut spans = Vec::new();
    for tag in &snapshot.areas {
        let selected = snapshot.selected_area.as_deref() == Some(tag.as_str());
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {tag} "), style));
        spans.push(Span::raw(" "));
    }
    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Areas "));
    frame.render_widget(filters, halves[0]);

    let stats = &snapshot.stats;
    let stats_line = Line::from(vec![
        Span::raw(format!("Total {}  ", stats.total)),
        Span::styled(
            format!("Booked {}  ", stats.booked),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!("Available {}", stats.available),
            Style::default().fg(Color::Green),
        ),
    ]);
    let widget = Paragraph::new(stats_line)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(widget, halves[1]);
}

fn draw_table_map(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;
    let rows: Vec<Row> = snapshot
        .tables
        .iter()
        .map(|table| {
            let booked = snapshot
                .bookings
                .get(&table.id)
                .copied()
                .unwrap_or(false);
            let (status, style) = if booked {
                ("Booked", Style::default().fg(Color::Red))
            } else {
                ("Available", Style::default().fg(Color::Green))
            };
            let (width, height) = table.render_size();
            Row::new(vec![
                Cell::from(format!("{}", table.id)),
                Cell::from(format!("{}", table.seats)),
                Cell::from(table.area.clone().unwrap_or_default()),
                Cell::from(format!("({:.0}, {:.0})", table.x, table.y)),
                Cell::from(format!("{width:.0}x{height:.0}")),
                Cell::from(Span::styled(status, style)),
            ])
        })
        .collect();

    let widget = TableWidget::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Id", "Seats", "Area", "Pos", "Size", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" Tables "));
    frame.render_widget(widget, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let pending = if app.pending_id.is_empty() {
        String::new()
    } else {
        format!("  toggle table: {}_", app.pending_id)
    };
    let help = Paragraph::new(format!(
        "←/→ slot   a cycle area   c clear filter   digits+Enter toggle   q quit{pending}"
    ))
    .block(Block::default().borders(Borders::ALL).title(" Keys "));
    frame.render_widget(help, area);
}

fn draw_logs(frame: &mut Frame, area: Rect, app: &App) {
    let widget = TuiLoggerWidget::default()
        .state(&app.logger_state)
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(widget, area);
}
