//! navdash — client core for a personal navigation dashboard.
//!
//! Entry point: runs an interactive console demo walking the components
//! against an in-process backend stub, so the crate can be exercised
//! without the real HTTP backend.

use navdash::app::App;
use navdash::database::Database;
use navdash::events::{dispatch_event, EventOutcome, UiEvent};
use navdash::managers::visit_tracker::{MemoryStore, SqliteVisitStore, VisitStore, VisitTracker};
use navdash::services::backend_client::{ConfigAction, ConfigBackend};
use navdash::services::context_menu::{DispatchMode, MenuAction};
use navdash::services::search_controller::ViewState;
use navdash::types::errors::BackendError;
use navdash::types::icon::IconRef;
use navdash::types::nav::{Section, Tile};
use navdash::types::search::SearchResultItem;

use std::sync::Arc;

/// Backend stub for the demo: accepts every mutation and answers searches
/// from a canned list.
struct DemoBackend;

impl ConfigBackend for DemoBackend {
    fn search(&self, term: &str) -> Result<Vec<SearchResultItem>, BackendError> {
        let canned = [
            ("GitHub", "https://github.com", "fab fa-github"),
            ("Docs.rs", "https://docs.rs", "fas fa-book"),
            ("Crates.io", "https://crates.io", "img/crates.png"),
        ];
        Ok(canned
            .iter()
            .filter(|(title, _, _)| title.to_lowercase().contains(&term.to_lowercase()))
            .map(|(title, url, icon)| SearchResultItem {
                title: title.to_string(),
                url: url.to_string(),
                icon: icon.to_string(),
            })
            .collect())
    }

    fn submit(&self, action: &ConfigAction) -> Result<(), BackendError> {
        println!("  [backend] accepted action '{}'", action.action_name());
        Ok(())
    }
}

fn main() {
    env_logger::init();

    println!();
    println!("  navdash v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let sections = vec![
        Section::with_tiles(
            "Tools",
            vec![
                Tile::new("GitHub", "https://github.com", "fab fa-github"),
                Tile::new("Docs.rs", "https://docs.rs", "fas fa-book"),
                Tile::new("Crates.io", "https://crates.io", "img/crates.png"),
            ],
            true,
        ),
        Section::with_tiles(
            "News",
            vec![Tile::new("Lobsters", "https://lobste.rs", "fas fa-rss")],
            true,
        ),
    ];

    let mut app = App::new(
        sections,
        Box::new(MemoryStore::new()),
        Box::new(DemoBackend),
        DispatchMode::Modal,
    );
    app.startup();

    demo_visit_tracking(&mut app);
    demo_search(&mut app);
    demo_context_menu(&mut app);
    demo_reorder(&mut app);
    demo_sqlite_store();

    println!("  done.");
}

fn section(name: &str) {
    println!("  ── {} ──", name);
}

fn demo_visit_tracking(app: &mut App) {
    section("Visit tracking");

    let github = app.page.sections()[0].tiles[0].id.clone();
    for _ in 0..3 {
        dispatch_event(app, UiEvent::TileClicked { id: github.clone() }).unwrap();
    }
    let docs = app.page.sections()[0].tiles[1].id.clone();
    dispatch_event(app, UiEvent::TileClicked { id: docs }).unwrap();

    app.refresh_frequent();
    let frequent = app.frequent.as_ref().expect("frequent section rendered");
    println!("  frequent section holds {} tiles:", frequent.tiles.len());
    for tile in &frequent.tiles {
        let icon = IconRef::classify(&tile.icon);
        let kind = if icon.is_glyph() { "glyph" } else { "image" };
        println!("    {} ({}, icon {} -> {})", tile.title, tile.url, kind, icon.render_target());
    }
    println!();
}

fn demo_search(app: &mut App) {
    section("Search");

    dispatch_event(app, UiEvent::SearchInput { term: "git".to_string() }).unwrap();
    match app.search.view() {
        ViewState::Results(tiles) => println!("  'git' matched {} tile(s)", tiles.len()),
        ViewState::Normal => println!("  'git' matched nothing"),
    }

    dispatch_event(app, UiEvent::SearchInput { term: String::new() }).unwrap();
    println!("  cleared input, back to normal view: {}", app.search.view() == &ViewState::Normal);
    println!();
}

fn demo_context_menu(app: &mut App) {
    section("Context menu + modal");

    let target = app.page.sections()[0].tiles[2].id.clone();
    dispatch_event(app, UiEvent::ContextMenuRequested { id: target, x: 120, y: 48 }).unwrap();
    dispatch_event(app, UiEvent::MenuActionSelected { action: MenuAction::Edit }).unwrap();
    println!("  edit action opened the modal: {}", app.edit_modal.is_open());

    if let Some(fields) = app.edit_modal.fields_mut() {
        fields.title = "crates.io registry".to_string();
    }
    dispatch_event(app, UiEvent::ModalSubmitted).unwrap();
    println!("  modal closed after submit: {}", !app.edit_modal.is_open());
    println!("  tile now titled '{}'", app.page.sections()[0].tiles[2].title);
    println!();
}

fn demo_reorder(app: &mut App) {
    section("Reorder");

    let first = app.page.sections()[0].tiles[0].id.clone();
    let outcome = dispatch_event(app, UiEvent::MoveLeft { id: first.clone() }).unwrap();
    println!("  move-left on the leftmost tile: no-op ({:?})", outcome == EventOutcome::None);

    dispatch_event(app, UiEvent::MoveRight { id: first }).unwrap();
    let order: Vec<_> = app.page.sections()[0].tiles.iter().map(|t| t.title.as_str()).collect();
    println!("  after move-right: {:?}", order);
    println!();
}

fn demo_sqlite_store() {
    section("SQLite visit store");

    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut tracker = VisitTracker::new(Box::new(SqliteVisitStore::new(db.clone())));
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");

    // A second store over the same database sees the persisted rows
    let mut reloaded = SqliteVisitStore::new(db);
    let records = reloaded.load();
    let count = records.get("https://github.com").map(|r| r.count).unwrap_or(0);
    println!("  persisted count for github.com: {}", count);
    println!();
}
