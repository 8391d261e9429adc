use crate::browser::{CopyFormat, SymbolBrowser};
use crate::catalog::{Category, Symbol};
use crate::ui::theme::Theme;
use anyhow::Result;
use std::time::{Duration, Instant};

/// Delay before the search field takes focus at startup
pub const SEARCH_FOCUS_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Grid,
}

/// Popover shown above the main screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Info,
    Related { symbol: Symbol, selected: usize },
    FormatPicker { selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub browser: SymbolBrowser,
    pub theme: Theme,
    pub focus: FocusPane,
    pub selected_index: usize,
    pub scroll_row: usize,
    pub search_mode: bool,
    pub modal: Option<Modal>,
    pub status: Option<Status>,
    pub should_quit: bool,
    grid_columns: usize,
    grid_rows: usize,
    search_focus_at: Option<Instant>,
}

impl App {
    pub fn new(browser: SymbolBrowser, theme: Theme) -> Self {
        Self {
            browser,
            theme,
            focus: FocusPane::Grid,
            selected_index: 0,
            scroll_row: 0,
            search_mode: false,
            modal: None,
            status: None,
            should_quit: false,
            grid_columns: 1,
            grid_rows: 1,
            search_focus_at: None,
        }
    }

    /// Focus the search field once [`SEARCH_FOCUS_DELAY`] has passed.
    pub fn schedule_search_focus(&mut self, now: Instant) {
        self.search_focus_at = Some(now + SEARCH_FOCUS_DELAY);
    }

    /// Run scheduled work due by `now`. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.browser.tick(now);

        if self.search_focus_at.is_some_and(|at| at <= now) {
            self.search_focus_at = None;
            self.search_mode = true;
            changed = true;
        }

        changed
    }

    /// Tell the app how many grid cells fit on screen.
    pub fn set_grid_viewport(&mut self, columns: usize, rows: usize) {
        self.grid_columns = columns.max(1);
        self.grid_rows = rows.max(1);
        self.clamp_selection();
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    pub fn grid_rows(&self) -> usize {
        self.grid_rows
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Sidebar => FocusPane::Grid,
            FocusPane::Grid => FocusPane::Sidebar,
        };
    }

    pub fn toggle_info(&mut self) {
        self.modal = match self.modal {
            Some(Modal::Info) => None,
            _ => Some(Modal::Info),
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // -- Categories --

    pub fn selected_category_index(&self) -> usize {
        self.browser
            .categories()
            .iter()
            .position(|&c| c == self.browser.selected_category)
            .unwrap_or(0)
    }

    pub fn select_category(&mut self, category: Category) {
        self.browser.select_category(category);
        self.selected_index = 0;
        self.scroll_row = 0;
    }

    pub fn select_category_at(&mut self, index: usize) {
        if let Some(&category) = self.browser.categories().get(index) {
            self.select_category(category);
        }
    }

    pub fn next_category(&mut self) {
        let count = self.browser.categories().len();
        self.select_category_at((self.selected_category_index() + 1) % count);
    }

    pub fn previous_category(&mut self) {
        let count = self.browser.categories().len();
        let current = self.selected_category_index();
        self.select_category_at(if current == 0 { count - 1 } else { current - 1 });
    }

    // -- Grid navigation --

    pub fn selected_symbol(&self) -> Option<Symbol> {
        self.browser
            .filtered_symbols()
            .get(self.selected_index)
            .map(|s| (*s).clone())
    }

    pub fn select_index(&mut self, index: usize) {
        self.selected_index = index;
        self.clamp_selection();
    }

    pub fn next(&mut self) {
        self.move_selection(1);
    }

    pub fn previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn next_row(&mut self) {
        self.move_selection(self.grid_columns as isize);
    }

    pub fn previous_row(&mut self) {
        self.move_selection(-(self.grid_columns as isize));
    }

    pub fn scroll_rows(&mut self, rows: isize) {
        self.move_selection(rows * self.grid_columns as isize);
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.browser.symbol_count();
        if count == 0 {
            return;
        }
        let target = self.selected_index as isize + delta;
        self.selected_index = target.clamp(0, count as isize - 1) as usize;
        self.ensure_visible();
    }

    /// Keep the selection inside the current result list and on screen.
    pub fn clamp_selection(&mut self) {
        let count = self.browser.symbol_count();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        let row = self.selected_index / self.grid_columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.grid_rows {
            self.scroll_row = row + 1 - self.grid_rows;
        }
    }

    // -- Search --

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
        self.search_focus_at = None;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.search_focus_at = None;
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut text = self.browser.search_text.clone();
        text.push(c);
        self.update_search(text);
    }

    pub fn search_pop_char(&mut self) {
        let mut text = self.browser.search_text.clone();
        text.pop();
        self.update_search(text);
    }

    pub fn clear_search(&mut self) {
        self.update_search(String::new());
    }

    fn update_search(&mut self, text: String) {
        self.browser.set_search_text(text);
        self.selected_index = 0;
        self.scroll_row = 0;
    }

    // -- Actions on the selected symbol --

    pub fn copy_selected(&mut self) {
        if let Some(symbol) = self.selected_symbol() {
            self.copy(&symbol);
        }
    }

    pub fn copy_selected_name(&mut self) {
        if let Some(symbol) = self.selected_symbol() {
            self.copy_name(&symbol);
        }
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(symbol) = self.selected_symbol() {
            self.toggle_favorite(&symbol);
        }
    }

    pub fn copy(&mut self, symbol: &Symbol) {
        let text = self.browser.render(symbol);
        let result = self.browser.copy(symbol);
        self.follow_recent_copy();
        self.report(result, format!("Copied {}", text));
    }

    pub fn copy_name(&mut self, symbol: &Symbol) {
        let result = self.browser.copy_name(symbol);
        self.follow_recent_copy();
        self.report(result, format!("Copied {}", symbol.name));
    }

    /// A copy moves the symbol to the front of Recent, so the highlight goes with it
    fn follow_recent_copy(&mut self) {
        if self.browser.selected_category == Category::Recent {
            self.selected_index = 0;
            self.scroll_row = 0;
        }
    }

    pub fn toggle_favorite(&mut self, symbol: &Symbol) {
        let result = self.browser.toggle_favorite(symbol);
        let message = if self.browser.is_favorite(symbol) {
            format!("Added {} to favorites", symbol.name)
        } else {
            format!("Removed {} from favorites", symbol.name)
        };
        self.report(result, message);
        // Unfavoriting inside the Favorites view shrinks the list
        self.clamp_selection();
    }

    fn report(&mut self, result: Result<()>, success: String) {
        self.status = Some(match result {
            Ok(()) => Status::Info(success),
            Err(e) => Status::Error(format!("{:#}", e)),
        });
    }

    // -- Related symbols popover --

    pub fn open_related(&mut self) {
        if let Some(symbol) = self.selected_symbol() {
            self.modal = Some(Modal::Related {
                symbol,
                selected: 0,
            });
        }
    }

    pub fn related_symbols(&self) -> Vec<Symbol> {
        match &self.modal {
            Some(Modal::Related { symbol, .. }) => self
                .browser
                .related_symbols(symbol)
                .into_iter()
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn related_next(&mut self) {
        let count = self.related_symbols().len();
        if let Some(Modal::Related { selected, .. }) = &mut self.modal {
            if count > 0 {
                *selected = (*selected + 1) % count;
            }
        }
    }

    pub fn related_previous(&mut self) {
        let count = self.related_symbols().len();
        if let Some(Modal::Related { selected, .. }) = &mut self.modal {
            if count > 0 {
                *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
            }
        }
    }

    pub fn selected_related(&self) -> Option<Symbol> {
        match &self.modal {
            Some(Modal::Related { selected, .. }) => {
                self.related_symbols().into_iter().nth(*selected)
            }
            _ => None,
        }
    }

    // -- Copy format picker --

    pub fn open_format_picker(&mut self) {
        let selected = CopyFormat::ALL
            .iter()
            .position(|&f| f == self.browser.copy_format())
            .unwrap_or(0);
        self.modal = Some(Modal::FormatPicker { selected });
    }

    pub fn format_picker_move(&mut self, delta: isize) {
        if let Some(Modal::FormatPicker { selected }) = &mut self.modal {
            let count = CopyFormat::ALL.len() as isize;
            *selected = (*selected as isize + delta).rem_euclid(count) as usize;
        }
    }

    pub fn confirm_format_picker(&mut self) {
        if let Some(Modal::FormatPicker { selected }) = self.modal {
            if let Some(&format) = CopyFormat::ALL.get(selected) {
                let result = self.browser.set_copy_format(format);
                self.report(result, format!("Copy format: {}", format.label()));
            }
            self.modal = None;
        }
    }

    pub fn cycle_copy_format(&mut self) {
        let format = self.browser.copy_format().next();
        let result = self.browser.set_copy_format(format);
        self.report(result, format!("Copy format: {}", format.label()));
    }

    // -- Theme --

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        self.status = Some(Status::Info(format!("Theme: {}", self.theme.name)));
    }
}
