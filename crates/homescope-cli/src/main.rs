//! Homescope CLI — terminal property browser
//!
//! Search the catalog, open listing details with a circular image gallery,
//! and keep a persisted favorites list.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use chrono::{Duration, NaiveDate};
use tracing::Level;

use homescope::catalog::{Property, PropertyCatalog, SearchCriteria};
use homescope::config::filter::{MAX_BEDS_UNLIMITED, TYPE_ANY};
use homescope::sanitize;
use homescope_app::data::{Favorites, JsonFileStore, MemoryStore};
use homescope_app::view::{Gallery, Route, SearchState, View};

/// Search panel defaults, matching the filter widget's initial state
const PANEL_MIN_PRICE: u64 = 100_000;
const PANEL_MAX_PRICE: u64 = 1_000_000;
/// Step for the price keys
const PRICE_STEP: u64 = 25_000;
/// Hard ceiling for the price keys
const PRICE_CAP: u64 = 2_000_000;

/// Values the type key cycles through
const TYPE_CHOICES: &[&str] = &[TYPE_ANY, "House", "Flat"];
/// Values the postcode key cycles through
const POSTCODE_CHOICES: &[&str] = &["", "BR1", "NW1", "SE1", "SW1"];
/// "Added within the last N days" presets (None = any time)
const DATE_PRESET_DAYS: &[Option<i64>] = &[None, Some(7), Some(30), Some(90)];

#[derive(Parser)]
#[command(name = "homescope", about = "Terminal property search", version)]
struct Cli {
    /// Properties JSON file to browse (defaults to the bundled catalog)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Keep favorites in memory only (skip the on-disk slot)
    #[arg(long)]
    ephemeral: bool,
}

/// Which pane list keys act on
#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Results,
    Favorites,
}

struct App {
    catalog: PropertyCatalog,
    search: SearchState,
    favorites: Favorites,
    route: Route,
    gallery: Gallery,
    focus: Focus,
    selected: usize,
    fav_selected: usize,
    date_preset: usize,
    status: String,
    running: bool,
}

impl App {
    fn new(catalog: PropertyCatalog, favorites: Favorites) -> Self {
        let mut search = SearchState::new(&catalog);
        search.criteria = panel_criteria();
        Self {
            catalog,
            search,
            favorites,
            route: Route::Search,
            gallery: Gallery::new(0),
            focus: Focus::Results,
            selected: 0,
            fav_selected: 0,
            date_preset: 0,
            status: String::new(),
            running: true,
        }
    }

    /// Listing currently highlighted in the results pane
    fn selected_listing(&self) -> Option<&Property> {
        let id = self.search.results().get(self.selected)?;
        self.catalog.get(id)
    }

    fn run_search(&mut self) {
        self.search.run_search(&self.catalog);
        self.selected = 0;
        self.status = format!("{} found", plural(self.search.result_count()));
    }

    fn reset_filters(&mut self) {
        self.search.reset(&self.catalog);
        self.search.criteria = panel_criteria();
        self.date_preset = 0;
        self.selected = 0;
        self.status = "Filters reset".to_string();
    }

    fn open_selected(&mut self) {
        let Some(property) = self.selected_listing() else {
            return;
        };
        let id = property.id.clone();
        let image_count = property.images.len();
        self.gallery = Gallery::new(image_count);
        self.route = Route::property(id);
    }

    fn back_to_search(&mut self) {
        self.gallery.close_lightbox();
        self.route = Route::Search;
    }

    /// Save the listing under the cursor — the drop-on-favorites analog
    fn favorite_selected(&mut self) {
        let property = match &self.route {
            Route::Search => self.selected_listing().cloned(),
            Route::Property(id) => self.catalog.get(id).cloned(),
        };
        if let Some(property) = property {
            let already = self.favorites.is_favorite(&property.id);
            self.favorites.add(&property);
            self.status = if already {
                "Already in favorites".to_string()
            } else {
                format!("Saved {}", property.display_address())
            };
        }
    }

    fn remove_selected_favorite(&mut self) {
        if let Some(property) = self.favorites.all().get(self.fav_selected) {
            let id = property.id.clone();
            self.favorites.remove(&id);
            self.fav_selected = self.fav_selected.min(self.favorites.count().saturating_sub(1));
            self.status = "Removed from favorites".to_string();
        }
    }

    fn cycle_type(&mut self) {
        let current = TYPE_CHOICES
            .iter()
            .position(|t| t.eq_ignore_ascii_case(&self.search.criteria.property_type))
            .unwrap_or(0);
        self.search.criteria.property_type =
            TYPE_CHOICES[(current + 1) % TYPE_CHOICES.len()].to_string();
    }

    fn cycle_postcode(&mut self) {
        let current = POSTCODE_CHOICES
            .iter()
            .position(|p| p.eq_ignore_ascii_case(self.search.criteria.postcode.trim()))
            .unwrap_or(0);
        self.search.criteria.postcode =
            POSTCODE_CHOICES[(current + 1) % POSTCODE_CHOICES.len()].to_string();
    }

    fn cycle_min_beds(&mut self) {
        self.search.criteria.min_beds = (self.search.criteria.min_beds + 1) % 7;
    }

    fn cycle_max_beds(&mut self) {
        // 10 (no max) -> 1..=6 -> back to 10
        self.search.criteria.max_beds = match self.search.criteria.max_beds {
            MAX_BEDS_UNLIMITED => 1,
            n if n >= 6 => MAX_BEDS_UNLIMITED,
            n => n + 1,
        };
    }

    fn cycle_date_preset(&mut self) {
        self.date_preset = (self.date_preset + 1) % DATE_PRESET_DAYS.len();
        self.search.criteria.date_from = DATE_PRESET_DAYS[self.date_preset]
            .and_then(|days| newest_listing_date(&self.catalog).map(|d| d - Duration::days(days)));
    }
}

/// The filter panel's initial criteria
fn panel_criteria() -> SearchCriteria {
    SearchCriteria::new().price_range(PANEL_MIN_PRICE, PANEL_MAX_PRICE)
}

/// Anchor for the "added recently" presets: the newest date in the catalog
fn newest_listing_date(catalog: &PropertyCatalog) -> Option<NaiveDate> {
    catalog.all().iter().map(|p| p.date_added).max()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.data {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            match PropertyCatalog::from_json(&json) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => PropertyCatalog::bundled(),
    };

    let favorites = if cli.ephemeral {
        Favorites::load(Box::new(MemoryStore::new()))
    } else {
        match JsonFileStore::default_location() {
            Ok(store) => Favorites::load(Box::new(store)),
            Err(e) => {
                eprintln!("Warning: {} — favorites will not be saved", e);
                Favorites::load(Box::new(MemoryStore::new()))
            }
        }
    };

    let mut app = App::new(catalog, favorites);

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while app.running {
        terminal.draw(|f| draw_ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key.code);
            }
        }
    }

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.route {
        Route::Search => handle_search_key(app, code),
        Route::Property(_) => handle_detail_key(app, code),
    }
}

fn handle_search_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Results => Focus::Favorites,
                Focus::Favorites => Focus::Results,
            };
        }
        KeyCode::Up => match app.focus {
            Focus::Results => app.selected = app.selected.saturating_sub(1),
            Focus::Favorites => app.fav_selected = app.fav_selected.saturating_sub(1),
        },
        KeyCode::Down => match app.focus {
            Focus::Results => {
                let last = app.search.result_count().saturating_sub(1);
                app.selected = (app.selected + 1).min(last);
            }
            Focus::Favorites => {
                let last = app.favorites.count().saturating_sub(1);
                app.fav_selected = (app.fav_selected + 1).min(last);
            }
        },
        KeyCode::Enter => match app.focus {
            Focus::Results => app.open_selected(),
            Focus::Favorites => {
                if let Some(property) = app.favorites.all().get(app.fav_selected) {
                    let id = property.id.clone();
                    app.gallery = Gallery::new(property.images.len());
                    app.route = Route::property(id);
                }
            }
        },
        KeyCode::Char('s') => app.run_search(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('f') => app.favorite_selected(),
        KeyCode::Char('x') => app.remove_selected_favorite(),
        KeyCode::Char('c') => {
            app.favorites.clear();
            app.fav_selected = 0;
            app.status = "Favorites cleared".to_string();
        }
        KeyCode::Char('t') => app.cycle_type(),
        KeyCode::Char('p') => app.cycle_postcode(),
        KeyCode::Char('b') => app.cycle_min_beds(),
        KeyCode::Char('B') => app.cycle_max_beds(),
        KeyCode::Char('-') => {
            app.search.criteria.min_price =
                app.search.criteria.min_price.saturating_sub(PRICE_STEP);
        }
        KeyCode::Char('=') => {
            app.search.criteria.min_price =
                (app.search.criteria.min_price + PRICE_STEP).min(PRICE_CAP);
        }
        KeyCode::Char('_') => {
            app.search.criteria.max_price =
                app.search.criteria.max_price.saturating_sub(PRICE_STEP);
        }
        KeyCode::Char('+') => {
            app.search.criteria.max_price =
                (app.search.criteria.max_price + PRICE_STEP).min(PRICE_CAP);
        }
        KeyCode::Char('d') => app.cycle_date_preset(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
            if app.gallery.lightbox_open() {
                app.gallery.close_lightbox();
            } else {
                app.back_to_search();
            }
        }
        KeyCode::Right => app.gallery.next(),
        KeyCode::Left => app.gallery.prev(),
        KeyCode::Char('l') => app.gallery.toggle_lightbox(),
        KeyCode::Char('f') => app.favorite_selected(),
        _ => {}
    }
}

fn draw_ui(f: &mut Frame, app: &App) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Homescope v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    match app.route.resolve(&app.catalog) {
        View::Search => draw_search(f, app, inner),
        View::Detail(property) => {
            if app.gallery.lightbox_open() {
                draw_lightbox(f, app, property, inner);
            } else {
                draw_detail(f, app, property, inner);
            }
        }
        View::NotFound(id) => draw_not_found(f, id, inner),
    }
}

fn draw_search(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Min(5),    // panes
        Constraint::Length(1), // status
        Constraint::Length(1), // help
    ])
    .split(area);

    let panes = Layout::horizontal([
        Constraint::Length(30),     // filters
        Constraint::Percentage(50), // results
        Constraint::Min(24),        // favorites
    ])
    .split(rows[0]);

    draw_filters(f, app, panes[0]);
    draw_results(f, app, panes[1]);
    draw_favorites(f, app, panes[2]);

    let status = Line::from(Span::styled(
        format!("  {}", app.status),
        Style::default().fg(Color::Yellow),
    ));
    f.render_widget(Paragraph::new(status), rows[1]);

    let help = Line::from(vec![
        Span::styled("  's' ", Style::default().fg(Color::Yellow)),
        Span::raw("search  "),
        Span::styled("'r' ", Style::default().fg(Color::Yellow)),
        Span::raw("reset  "),
        Span::styled("'f' ", Style::default().fg(Color::Yellow)),
        Span::raw("save  "),
        Span::styled("'x' ", Style::default().fg(Color::Yellow)),
        Span::raw("remove  "),
        Span::styled("'c' ", Style::default().fg(Color::Yellow)),
        Span::raw("clear  "),
        Span::styled("Tab ", Style::default().fg(Color::Yellow)),
        Span::raw("pane  "),
        Span::styled("'q' ", Style::default().fg(Color::Yellow)),
        Span::raw("quit"),
    ]);
    f.render_widget(Paragraph::new(help), rows[2]);
}

fn draw_filters(f: &mut Frame, app: &App, area: Rect) {
    let c = &app.search.criteria;

    let type_line = if c.property_type == TYPE_ANY {
        "Any type".to_string()
    } else {
        c.property_type.clone()
    };
    let postcode_line = if c.postcode.trim().is_empty() {
        "Any area".to_string()
    } else {
        c.postcode.clone()
    };
    let min_beds_line = if c.min_beds == 0 {
        "No min".to_string()
    } else {
        c.min_beds.to_string()
    };
    let max_beds_line = if c.max_beds >= MAX_BEDS_UNLIMITED {
        "No max".to_string()
    } else {
        c.max_beds.to_string()
    };
    let date_line = match c.date_from {
        Some(date) => format!("since {}", format_date(date)),
        None => "Any time".to_string(),
    };

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let text = vec![
        Line::from(vec![
            Span::styled(" Type (t):     ", label),
            Span::styled(type_line, value),
        ]),
        Line::from(vec![
            Span::styled(" Price (-/=):  ", label),
            Span::styled(
                format!("{} - {}", format_price(c.min_price), format_price(c.max_price)),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled(" Beds (b/B):   ", label),
            Span::styled(format!("{} - {}", min_beds_line, max_beds_line), value),
        ]),
        Line::from(vec![
            Span::styled(" Area (p):     ", label),
            Span::styled(postcode_line, value),
        ]),
        Line::from(vec![
            Span::styled(" Added (d):    ", label),
            Span::styled(date_line, value),
        ]),
    ];

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let header = if app.search.has_searched() {
        format!(" {} found ", plural(app.search.result_count()))
    } else {
        format!(" Showing all {} ", plural(app.search.result_count()))
    };

    let items: Vec<ListItem> = app
        .search
        .results()
        .iter()
        .filter_map(|id| app.catalog.get(id))
        .map(|p| {
            let marker = if app.favorites.is_favorite(&p.id) {
                "★ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(format_price(p.price), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::raw(format!(
                    "{} · {} bed · {} · {}",
                    p.property_type, p.bedrooms, p.postcode, p.location
                )),
            ]))
        })
        .collect();

    let highlight = if app.focus == Focus::Results {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let block = Block::default()
        .title(header)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if items.is_empty() {
        let empty = Paragraph::new("\n  No properties found.\n  Try adjusting your search criteria.")
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_favorites(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" ★ Favorites ({}) ", app.favorites.count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.favorites.is_empty() {
        let empty = Paragraph::new("\n  No favorites yet.\n  Press 'f' on a listing\n  to save it here.")
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .favorites
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(format_price(p.price), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(p.location.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let highlight = if app.focus == Focus::Favorites {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default();
    state.select(Some(app.fav_selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(f: &mut Frame, app: &App, property: &Property, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(7), // header facts
        Constraint::Length(4), // gallery strip
        Constraint::Min(4),    // description
        Constraint::Length(1), // help
    ])
    .split(area);

    let saved = app.favorites.is_favorite(&property.id);
    let label = Style::default().fg(Color::DarkGray);
    let header = vec![
        Line::from(vec![
            Span::styled(
                format_price(property.price),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::styled("  Guide price", label),
            Span::raw("  "),
            Span::styled(
                if saved { "★ Saved" } else { "♡ Press 'f' to save" },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            property.display_address().to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(property.location.clone(), label)),
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::raw(property.property_type.clone()),
            Span::styled("   Bedrooms: ", label),
            Span::raw(property.bedrooms.to_string()),
            Span::styled("   Postcode: ", label),
            Span::raw(property.postcode.clone()),
            Span::styled("   Added: ", label),
            Span::raw(format_date(property.date_added)),
        ]),
        Line::from(vec![
            Span::styled("Tenure: ", label),
            Span::raw(property.tenure_or_default().to_string()),
            Span::styled("   Council tax band: ", label),
            Span::raw(property.council_tax_band_or_default().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Floor plan: ", label),
            Span::raw(property.floor_plan.clone()),
        ]),
        Line::from(vec![
            Span::styled("Map: ", label),
            Span::raw(
                property
                    .map_url
                    .as_deref()
                    .unwrap_or("not available for this property")
                    .to_string(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(header), rows[0]);

    draw_gallery_strip(f, app, property, rows[1]);

    let description = html_to_lines(&sanitize::clean_html(&property.long_description));
    let desc_block = Block::default()
        .title(" Description ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .block(desc_block),
        rows[2],
    );

    let help = Line::from(vec![
        Span::styled(" ←/→ ", Style::default().fg(Color::Yellow)),
        Span::raw("gallery  "),
        Span::styled("'l' ", Style::default().fg(Color::Yellow)),
        Span::raw("lightbox  "),
        Span::styled("'f' ", Style::default().fg(Color::Yellow)),
        Span::raw("save  "),
        Span::styled("Esc ", Style::default().fg(Color::Yellow)),
        Span::raw("back"),
    ]);
    f.render_widget(Paragraph::new(help), rows[3]);
}

fn draw_gallery_strip(f: &mut Frame, app: &App, property: &Property, area: Rect) {
    let current = property
        .images
        .get(app.gallery.index())
        .map(String::as_str)
        .unwrap_or("(no images)");

    let text = vec![
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Yellow)),
            Span::styled(current.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(" ›", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            app.gallery.counter(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Gallery ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_lightbox(f: &mut Frame, app: &App, property: &Property, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Min(4),    // image
        Constraint::Length(1), // counter
        Constraint::Length(1), // thumbnails
        Constraint::Length(1), // help
    ])
    .split(area);

    let current = property
        .images
        .get(app.gallery.index())
        .map(String::as_str)
        .unwrap_or("(no images)");

    let image = Paragraph::new(format!("\n\n🖼  {}", current))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(image, rows[0]);

    f.render_widget(
        Paragraph::new(app.gallery.counter()).alignment(Alignment::Center),
        rows[1],
    );

    // One marker per image, the current one highlighted
    let thumbs: Vec<Span> = property
        .images
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i == app.gallery.index() {
                Span::styled(" ■ ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled(" □ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(thumbs)).alignment(Alignment::Center),
        rows[2],
    );

    let help = Line::from(vec![
        Span::styled(" ←/→ ", Style::default().fg(Color::Yellow)),
        Span::raw("navigate  "),
        Span::styled("Esc/'l' ", Style::default().fg(Color::Yellow)),
        Span::raw("close"),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), rows[3]);
}

fn draw_not_found(f: &mut Frame, id: &str, area: Rect) {
    let text = vec![
        Line::raw(""),
        Line::styled("Property Not Found", Style::default().fg(Color::Red).bold()),
        Line::raw(""),
        Line::raw(format!(
            "The listing '{}' doesn't exist or has been removed.",
            id
        )),
        Line::raw(""),
        Line::styled("Press Esc to go back to search", Style::default().fg(Color::Yellow)),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        area,
    );
}

/// Pluralized listing count, e.g. "1 property" / "3 properties"
fn plural(count: usize) -> String {
    if count == 1 {
        "1 property".to_string()
    } else {
        format!("{} properties", count)
    }
}

/// Price with pound sign and thousands separators, e.g. "£450,000"
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("£{}", grouped.chars().rev().collect::<String>())
}

/// UK-style date, e.g. "12 Oct 2025"
fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Collapse sanitized HTML into plain text lines for terminal display
///
/// Block tags become line breaks, list items get a bullet, and any remaining
/// tags are dropped. Expects already-sanitized input.
fn html_to_lines(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag: emit as-is
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let tag = rest[start + 1..start + end].trim_end_matches('/').trim();
        match tag {
            "/p" | "br" | "/ul" | "/ol" | "/h1" | "/h2" | "/h3" | "/h4" | "/h5" | "/h6"
            | "/blockquote" => out.push('\n'),
            "li" => out.push_str("\n • "),
            _ => {}
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);
    // Entity forms produced by the sanitizer
    out.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(450_000), "£450,000");
        assert_eq!(format_price(325_000), "£325,000");
        assert_eq!(format_price(1_000_000), "£1,000,000");
        assert_eq!(format_price(500), "£500");
        assert_eq!(format_price(0), "£0");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(format_date(date), "15 Oct 2025");

        let first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_date(first), "1 Jan 2025");
    }

    #[test]
    fn test_html_to_lines_paragraphs() {
        let text = html_to_lines("<p>First.</p><p>Second.</p>");
        assert_eq!(text, "First.\nSecond.");
    }

    #[test]
    fn test_html_to_lines_list_items() {
        let text = html_to_lines("<ul><li>Garden</li><li>Garage</li></ul>");
        assert!(text.contains("• Garden"));
        assert!(text.contains("• Garage"));
    }

    #[test]
    fn test_html_to_lines_drops_inline_tags() {
        let text = html_to_lines("<p>A <strong>bold</strong> claim</p>");
        assert_eq!(text, "A bold claim");
    }

    #[test]
    fn test_html_to_lines_unescapes_entities() {
        assert_eq!(html_to_lines("Fish &amp; chips"), "Fish & chips");
    }

    #[test]
    fn test_panel_criteria_matches_widget_defaults() {
        let criteria = panel_criteria();
        assert_eq!(criteria.min_price, 100_000);
        assert_eq!(criteria.max_price, 1_000_000);
        assert_eq!(criteria.property_type, "any");
    }

    #[test]
    fn test_app_open_and_back() {
        let catalog = PropertyCatalog::bundled();
        let favorites = Favorites::load(Box::new(MemoryStore::new()));
        let mut app = App::new(catalog, favorites);

        app.open_selected();
        assert!(matches!(app.route, Route::Property(_)));
        assert!(!app.gallery.is_empty());

        app.back_to_search();
        assert_eq!(app.route, Route::Search);
    }

    #[test]
    fn test_app_favorite_selected_from_search() {
        let catalog = PropertyCatalog::bundled();
        let favorites = Favorites::load(Box::new(MemoryStore::new()));
        let mut app = App::new(catalog, favorites);

        let id = app.selected_listing().unwrap().id.clone();
        app.favorite_selected();
        assert!(app.favorites.is_favorite(&id));

        // Second press is a no-op
        app.favorite_selected();
        assert_eq!(app.favorites.count(), 1);
    }

    #[test]
    fn test_app_cycles_wrap() {
        let catalog = PropertyCatalog::bundled();
        let favorites = Favorites::load(Box::new(MemoryStore::new()));
        let mut app = App::new(catalog, favorites);

        for _ in 0..TYPE_CHOICES.len() {
            app.cycle_type();
        }
        assert_eq!(app.search.criteria.property_type, TYPE_ANY);

        for _ in 0..POSTCODE_CHOICES.len() {
            app.cycle_postcode();
        }
        assert_eq!(app.search.criteria.postcode, "");
    }

    #[test]
    fn test_app_date_presets_anchor_on_newest_listing() {
        let catalog = PropertyCatalog::bundled();
        let newest = newest_listing_date(&catalog).unwrap();
        let favorites = Favorites::load(Box::new(MemoryStore::new()));
        let mut app = App::new(catalog, favorites);

        assert!(app.search.criteria.date_from.is_none());
        app.cycle_date_preset();
        assert_eq!(
            app.search.criteria.date_from,
            Some(newest - Duration::days(7))
        );

        // Cycling through every preset lands back on "any time"
        for _ in 1..DATE_PRESET_DAYS.len() {
            app.cycle_date_preset();
        }
        assert!(app.search.criteria.date_from.is_none());
    }

    #[test]
    fn test_app_remove_favorite_clamps_cursor() {
        let catalog = PropertyCatalog::bundled();
        let favorites = Favorites::load(Box::new(MemoryStore::new()));
        let mut app = App::new(catalog, favorites);

        app.favorite_selected();
        app.selected = 1;
        app.favorite_selected();
        assert_eq!(app.favorites.count(), 2);

        app.fav_selected = 1;
        app.remove_selected_favorite();
        assert_eq!(app.favorites.count(), 1);
        assert_eq!(app.fav_selected, 0);
    }
}
