//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header                                       │
//! ├──────────────┬───────────────────────────────┤
//! │ Categories   │ Search                        │
//! │              │ N symbols                     │
//! │              │ ┌ grid ─────────────────────┐ │
//! │              │ │ cell cell cell cell       │ │
//! │              │ └───────────────────────────┘ │
//! ├──────────────┴───────────────────────────────┤
//! │ Footer                                       │
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of one grid cell, in columns
pub const CELL_WIDTH: u16 = 16;
/// Height of one grid cell, in rows
pub const CELL_HEIGHT: u16 = 3;

const SIDEBAR_WIDTH: u16 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub search: Rect,
    pub count: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(1), // Count
                Constraint::Min(0),    // Grid
            ])
            .split(body[1]);

        Self {
            header: rows[0],
            sidebar: body[0],
            search: main[0],
            count: main[1],
            grid: main[2],
            footer: rows[2],
        }
    }

    /// Grid area inside its border
    pub fn grid_inner(&self) -> Rect {
        inner(self.grid)
    }

    /// Sidebar area inside its border
    pub fn sidebar_inner(&self) -> Rect {
        inner(self.sidebar)
    }

    /// Number of cells per grid row (at least one)
    pub fn grid_columns(&self) -> usize {
        usize::from((self.grid_inner().width / CELL_WIDTH).max(1))
    }

    /// Number of fully visible grid rows (at least one)
    pub fn grid_rows(&self) -> usize {
        usize::from((self.grid_inner().height / CELL_HEIGHT).max(1))
    }

    /// Screen rectangle of the cell at `(row, column)` in the visible grid
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let inner = self.grid_inner();
        let x = inner.x + CELL_WIDTH * column as u16;
        let y = inner.y + CELL_HEIGHT * row as u16;
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(inner)
    }

    /// Index of the symbol under `(x, y)`, given the first visible row
    pub fn grid_hit(&self, scroll_row: usize, x: u16, y: u16) -> Option<usize> {
        let inner = self.grid_inner();
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let column = usize::from((x - inner.x) / CELL_WIDTH);
        if column >= self.grid_columns() {
            return None;
        }
        let row = usize::from((y - inner.y) / CELL_HEIGHT);
        Some((scroll_row + row) * self.grid_columns() + column)
    }

    /// First category row drawn so that row `selected` stays visible
    pub fn sidebar_offset(&self, selected: usize) -> usize {
        let visible = usize::from(self.sidebar_inner().height.max(1));
        selected.saturating_sub(visible - 1)
    }

    /// Index of the category row under `(x, y)`, given the first drawn row
    pub fn sidebar_hit(&self, offset: usize, x: u16, y: u16) -> Option<usize> {
        let inner = self.sidebar_inner();
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        Some(offset + usize::from(y - inner.y))
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
