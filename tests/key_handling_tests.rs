//! Keyboard event handling tests
//!
//! Tests for keyboard input handling including quit keys, search mode,
//! navigation, favorites and popovers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use symboldrop::browser::{CopyFormat, SymbolBrowser};
use symboldrop::catalog::{Category, GlyphTable, SymbolCatalog};
use symboldrop::clipboard::MemoryClipboard;
use symboldrop::prefs::MemoryPreferenceStore;
use symboldrop::ui::app::{FocusPane, Modal, Status, SEARCH_FOCUS_DELAY};
use symboldrop::ui::input::handle_key;
use symboldrop::ui::theme::Theme;
use symboldrop::ui::App;

/// Helper to create a key event
fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, key_event(code));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Helper to create a test app over the bundled catalog
fn create_test_app() -> (App, MemoryClipboard, MemoryPreferenceStore) {
    let clipboard = MemoryClipboard::new();
    let store = MemoryPreferenceStore::new();
    let browser = SymbolBrowser::new(
        SymbolCatalog::bundled(),
        GlyphTable::bundled(),
        Box::new(store.clone()),
        Box::new(clipboard.clone()),
    );
    let mut app = App::new(browser, Theme::default_theme().clone());
    app.set_grid_viewport(4, 10);
    (app, clipboard, store)
}

#[test]
fn test_quit_with_q_key() {
    let (mut app, _, _) = create_test_app();
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_quit_with_capital_q_key() {
    let (mut app, _, _) = create_test_app();
    press(&mut app, KeyCode::Char('Q'));
    assert!(app.should_quit);
}

#[test]
fn test_info_modal_toggle() {
    let (mut app, _, _) = create_test_app();

    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.modal, Some(Modal::Info));

    // Other keys are swallowed while the modal is open
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_index, 0);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.modal, None);
}

#[test]
fn test_search_field_focuses_after_delay() {
    let (mut app, _, _) = create_test_app();
    let start = Instant::now();
    app.schedule_search_focus(start);

    app.tick(start);
    assert!(!app.search_mode);

    app.tick(start + SEARCH_FOCUS_DELAY);
    assert!(app.search_mode);

    type_text(&mut app, "bolt");
    assert_eq!(app.browser.search_text, "bolt");
}

#[test]
fn test_search_then_copy_with_enter() {
    let (mut app, clipboard, store) = create_test_app();

    press(&mut app, KeyCode::Char('/'));
    assert!(app.search_mode);
    type_text(&mut app, "STAR.FILL");

    press(&mut app, KeyCode::Enter);
    assert_eq!(clipboard.text().as_deref(), Some("★"));
    assert_eq!(store.preferences().recent_symbol_ids, vec!["star.fill"]);
    assert_eq!(app.browser.last_copied(), Some("star.fill"));
    assert!(matches!(app.status, Some(Status::Info(_))));
}

#[test]
fn test_search_backspace_and_escape() {
    let (mut app, _, _) = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "xyz");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.browser.search_text, "xy");

    // First Esc leaves the field, second clears the text
    press(&mut app, KeyCode::Esc);
    assert!(!app.search_mode);
    assert_eq!(app.browser.search_text, "xy");

    press(&mut app, KeyCode::Esc);
    assert!(app.browser.search_text.is_empty());
}

#[test]
fn test_no_results_copy_does_nothing() {
    let (mut app, clipboard, _) = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "no-such-symbol");
    assert_eq!(app.browser.symbol_count(), 0);

    press(&mut app, KeyCode::Enter);
    assert_eq!(clipboard.writes(), 0);
}

#[test]
fn test_tab_moves_between_sidebar_and_grid() {
    let (mut app, _, _) = create_test_app();
    assert_eq!(app.focus, FocusPane::Grid);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, FocusPane::Sidebar);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.browser.selected_category, Category::General);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, FocusPane::Grid);
}

#[test]
fn test_grid_navigation() {
    let (mut app, _, _) = create_test_app();

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.selected_index, 1);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_index, 5);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.selected_index, 4);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected_index, 0);

    press(&mut app, KeyCode::End);
    assert_eq!(app.selected_index, app.browser.symbol_count() - 1);
    assert!(app.scroll_row > 0);
}

#[test]
fn test_favorite_and_favorites_view() {
    let (mut app, _, store) = create_test_app();

    press(&mut app, KeyCode::Char('f'));
    let first = app.selected_symbol().unwrap();
    assert!(app.browser.is_favorite(&first));
    assert_eq!(store.preferences().favorite_symbol_ids, vec![first.name.clone()]);

    app.select_category(Category::Favorites);
    assert_eq!(app.selected_symbol(), Some(first));

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.browser.symbol_count(), 0);
}

#[test]
fn test_copy_name_with_n() {
    let (mut app, clipboard, _) = create_test_app();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(clipboard.text().as_deref(), Some("star.fill"));
}

#[test]
fn test_related_popover() {
    let (mut app, clipboard, _) = create_test_app();
    press(&mut app, KeyCode::Char('l')); // star.fill
    press(&mut app, KeyCode::Char('r'));

    let related = app.related_symbols();
    assert!(related.iter().any(|s| s.name == "star"));
    assert!(related.iter().all(|s| s.name != "star.fill"));

    press(&mut app, KeyCode::Down);
    let chosen = app.selected_related().unwrap();
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(clipboard.text(), Some(chosen.name));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.modal, None);
}

#[test]
fn test_format_picker_changes_copy_format() {
    let (mut app, clipboard, store) = create_test_app();

    press(&mut app, KeyCode::Char('c'));
    assert!(matches!(app.modal, Some(Modal::FormatPicker { .. })));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.browser.copy_format(), CopyFormat::CodeSnippet);
    assert_eq!(store.preferences().copy_format(), CopyFormat::CodeSnippet);

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        clipboard.text().as_deref(),
        Some(r#"Image(systemName: "star")"#)
    );
}

#[test]
fn test_clipboard_failure_shows_error() {
    let browser = SymbolBrowser::new(
        SymbolCatalog::bundled(),
        GlyphTable::bundled(),
        Box::new(MemoryPreferenceStore::new()),
        Box::new(MemoryClipboard::unavailable()),
    );
    let mut app = App::new(browser, Theme::default_theme().clone());

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.status, Some(Status::Error(_))));
    // The copy still counts as recent
    assert_eq!(app.browser.recent_ids(), ["star"]);

    // The message goes away with the next key
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.status, None);
}
