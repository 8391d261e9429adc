//! Keyboard and mouse dispatch.
//!
//! Handlers only mutate [`App`]; anything that must reach outside the app
//! (saving the config) is reported back as an [`Effect`].

use crate::ui::app::{App, FocusPane, Modal};
use crate::ui::layout::AppLayout;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Side effect requested by an input handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ThemeChanged,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Effect {
    if key.kind == KeyEventKind::Release {
        return Effect::None;
    }

    // A status message lasts until the next key press
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Effect::None;
    }

    match app.modal {
        Some(Modal::Info) => {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Char('q') | KeyCode::Esc) {
                app.close_modal();
            }
            return Effect::None;
        }
        Some(Modal::Related { .. }) => {
            handle_related_key(app, key);
            return Effect::None;
        }
        Some(Modal::FormatPicker { .. }) => {
            handle_format_picker_key(app, key);
            return Effect::None;
        }
        None => {}
    }

    if app.search_mode {
        handle_search_key(app, key);
        return Effect::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('i') => app.toggle_info(),
        KeyCode::Char('c') => app.open_format_picker(),
        KeyCode::Char('C') => app.cycle_copy_format(),
        KeyCode::Char('t') => {
            app.cycle_theme();
            return Effect::ThemeChanged;
        }
        KeyCode::Esc => {
            if !app.browser.search_text.is_empty() {
                app.clear_search();
            }
        }
        _ => match app.focus {
            FocusPane::Sidebar => handle_sidebar_key(app, key),
            FocusPane::Grid => handle_grid_key(app, key),
        },
    }

    Effect::None
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_category(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_category(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.focus = FocusPane::Grid,
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.next(),
        KeyCode::Char('h') | KeyCode::Left => app.previous(),
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
        KeyCode::PageDown => app.scroll_rows(app.grid_rows() as isize),
        KeyCode::PageUp => app.scroll_rows(-(app.grid_rows() as isize)),
        KeyCode::Home | KeyCode::Char('g') => app.select_index(0),
        KeyCode::End | KeyCode::Char('G') => app.select_index(usize::MAX),
        KeyCode::Enter => app.copy_selected(),
        KeyCode::Char('n') => app.copy_selected_name(),
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char('r') => app.open_related(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_search_mode(),
        KeyCode::Tab => {
            app.exit_search_mode();
            app.toggle_focus();
        }
        KeyCode::Down => app.next_row(),
        KeyCode::Up => app.previous_row(),
        KeyCode::Right => app.next(),
        KeyCode::Left => app.previous(),
        KeyCode::Backspace => app.search_pop_char(),
        KeyCode::Enter => app.copy_selected(),
        KeyCode::Char(c) => app.search_push_char(c),
        _ => {}
    }
}

fn handle_related_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Char('j') | KeyCode::Down => app.related_next(),
        KeyCode::Char('k') | KeyCode::Up => app.related_previous(),
        KeyCode::Enter => {
            if let Some(symbol) = app.selected_related() {
                app.copy(&symbol);
            }
        }
        KeyCode::Char('n') => {
            if let Some(symbol) = app.selected_related() {
                app.copy_name(&symbol);
            }
        }
        KeyCode::Char('f') => {
            if let Some(symbol) = app.selected_related() {
                app.toggle_favorite(&symbol);
            }
        }
        _ => {}
    }
}

fn handle_format_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Char('j') | KeyCode::Down => app.format_picker_move(1),
        KeyCode::Char('k') | KeyCode::Up => app.format_picker_move(-1),
        KeyCode::Enter => app.confirm_format_picker(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, layout: &AppLayout, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(button) => {
            if app.modal.is_some() {
                app.close_modal();
                return;
            }

            let offset = layout.sidebar_offset(app.selected_category_index());
            if let Some(index) = layout.sidebar_hit(offset, x, y) {
                if button == MouseButton::Left {
                    app.select_category_at(index);
                    app.focus = FocusPane::Sidebar;
                }
                return;
            }

            if layout.search.contains(Position::new(x, y)) {
                app.enter_search_mode();
                return;
            }

            let Some(index) = layout.grid_hit(app.scroll_row, x, y) else {
                return;
            };
            if index >= app.browser.symbol_count() {
                return;
            }
            app.focus = FocusPane::Grid;
            app.select_index(index);
            match button {
                MouseButton::Left => app.copy_selected(),
                MouseButton::Right => app.copy_selected_name(),
                MouseButton::Middle => {}
            }
        }
        MouseEventKind::ScrollDown => {
            if layout.grid.contains(Position::new(x, y)) {
                app.scroll_rows(1);
            } else if layout.sidebar.contains(Position::new(x, y)) {
                app.next_category();
            }
        }
        MouseEventKind::ScrollUp => {
            if layout.grid.contains(Position::new(x, y)) {
                app.scroll_rows(-1);
            } else if layout.sidebar.contains(Position::new(x, y)) {
                app.previous_category();
            }
        }
        _ => {}
    }
}
