use crate::browser::CopyFormat;
use crate::catalog::{Category, Symbol};
use crate::ui::app::{App, FocusPane, Modal, Status};
use crate::ui::layout::{AppLayout, CELL_WIDTH};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const SEARCH_PLACEHOLDER: &str = "Search symbols...";
const MISSING_GLYPH: &str = "◌";

pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    render_sidebar(frame, app, &layout);
    render_search(frame, app, layout.search);
    render_count(frame, app, layout.count);
    render_grid(frame, app, &layout);
    render_footer(frame, app, layout.footer);

    match &app.modal {
        Some(Modal::Info) => render_info(frame, app),
        Some(Modal::Related { symbol, selected }) => render_related(frame, app, symbol, *selected),
        Some(Modal::FormatPicker { selected }) => render_format_picker(frame, app, *selected),
        None => {}
    }
}

fn panel<'a>(theme: &Theme, focused: bool) -> Block<'a> {
    let border = if focused { theme.accent } else { theme.fg_dim };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg).fg(theme.fg))
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  SymbolDrop  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Copy as: {}", app.browser.copy_format().label()),
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(panel(theme, false));

    frame.render_widget(header, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let theme = &app.theme;
    let selected = app.browser.selected_category;
    let offset = layout.sidebar_offset(app.selected_category_index());

    let items: Vec<ListItem> = app
        .browser
        .categories()
        .iter()
        .skip(offset)
        .map(|&category| {
            let marker = if category == selected { "▸ " } else { "  " };
            let style = if category == selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            let icon = app.browser.glyphs().glyph(category.icon()).unwrap_or(" ");
            ListItem::new(format!("{}{} {}", marker, icon, category.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        panel(theme, app.focus == FocusPane::Sidebar && !app.search_mode).title(" Categories "),
    );

    frame.render_widget(list, layout.sidebar);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let text = &app.browser.search_text;

    let line = if text.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(theme.fg_dim),
        ))
    } else {
        Line::from(Span::styled(text.as_str(), Style::default().fg(theme.fg)))
    };

    let search = Paragraph::new(line).block(panel(theme, app.search_mode).title(" 🔍 "));
    frame.render_widget(search, area);

    if app.search_mode && app.modal.is_none() {
        let x = area.x + 1 + text.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn render_count(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.browser.symbol_count();
    let noun = if count == 1 { "symbol" } else { "symbols" };
    let line = Line::from(Span::styled(
        format!(" {} {}", count, noun),
        Style::default().fg(app.theme.fg_dim),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_grid(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let theme = &app.theme;
    let category = app.browser.selected_category;
    let block = panel(theme, app.focus == FocusPane::Grid && !app.search_mode)
        .title(format!(" {} ", category.label()));
    frame.render_widget(block, layout.grid);

    let symbols = app.browser.filtered_symbols();
    if symbols.is_empty() {
        let message = Paragraph::new(empty_message(category, &app.browser.search_text))
            .style(Style::default().fg(theme.fg_dim))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, layout.grid_inner());
        return;
    }

    let columns = layout.grid_columns();
    let first = app.scroll_row * columns;
    let visible = layout.grid_rows() * columns;

    for (offset, symbol) in symbols.iter().skip(first).take(visible).enumerate() {
        let area = layout.cell_rect(offset / columns, offset % columns);
        if area.is_empty() {
            continue;
        }
        render_cell(frame, app, symbol, first + offset == app.selected_index, area);
    }
}

fn empty_message(category: Category, search: &str) -> String {
    if !search.is_empty() {
        return format!("No symbols match \"{}\"", search);
    }
    match category {
        Category::Recent => "No recent symbols. Copy one and it shows up here.".to_string(),
        Category::Favorites => "No favorites yet. Press f to add one.".to_string(),
        _ => "No symbols".to_string(),
    }
}

fn render_cell(frame: &mut Frame, app: &App, symbol: &Symbol, selected: bool, area: Rect) {
    let theme = &app.theme;
    let base = if selected {
        Style::default().bg(theme.selection_bg).fg(theme.fg)
    } else {
        Style::default().bg(theme.bg).fg(theme.fg)
    };

    let glyph = app
        .browser
        .glyphs()
        .glyph(&symbol.name)
        .map(|g| Span::styled(g.to_string(), base.add_modifier(Modifier::BOLD)))
        .unwrap_or_else(|| Span::styled(MISSING_GLYPH, base.fg(theme.fg_dim)));

    let mut top = vec![Span::raw(" "), glyph];
    if selected && app.browser.has_related(symbol) {
        top.push(Span::styled(" …", base.fg(theme.fg_dim)));
    }
    if app.browser.is_favorite(symbol) {
        top.push(Span::styled(" ★", base.fg(theme.favorite)));
    }
    if app.browser.is_copied(symbol) {
        top.push(Span::styled(" ✓", base.fg(theme.copied)));
    }

    let name_style = if selected {
        base.add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.fg_dim)
    };
    let name = Line::from(Span::styled(
        format!(" {}", truncate(&symbol.name, usize::from(CELL_WIDTH) - 2)),
        name_style,
    ));

    let status = if app.browser.is_copied(symbol) {
        Line::from(Span::styled(" Copied!", base.fg(theme.copied)))
    } else {
        Line::default()
    };

    frame.render_widget(
        Paragraph::new(vec![Line::from(top), name, status]).style(base),
        area,
    );
}

/// Shorten `text` to `width` characters, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = match &app.status {
        Some(Status::Info(message)) => {
            Line::from(Span::styled(message.as_str(), Style::default().fg(theme.copied)))
        }
        Some(Status::Error(message)) => {
            Line::from(Span::styled(message.as_str(), Style::default().fg(theme.error)))
        }
        None => Line::from(Span::styled(help_text(app), Style::default().fg(theme.fg_dim))),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn help_text(app: &App) -> &'static str {
    if app.search_mode {
        return "[Type] Filter  [↑↓←→] Move  [Enter] Copy  [Esc] Done  [Tab] Categories";
    }
    match app.focus {
        FocusPane::Sidebar => "[↑↓/jk] Category  [Enter] Grid  [/] Search  [Tab] Switch  [i] Help  [q] Quit",
        FocusPane::Grid => {
            "[hjkl] Move  [Enter] Copy  [n] Name  [f] Favorite  [r] Related  [c] Format  [/] Search  [i] Help  [q] Quit"
        }
    }
}

/// A rectangle of at most `width` x `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_info(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(theme.accent)),
            Span::styled(what, Style::default().fg(theme.fg)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "SymbolDrop",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} symbols, {} glyphs, theme {}",
                app.browser.catalog().len(),
                app.browser.glyphs().len(),
                theme.name
            ),
            Style::default().fg(theme.fg_dim),
        )),
        Line::default(),
        key("Enter", "Copy in the active format"),
        key("n", "Copy the symbol name"),
        key("f", "Toggle favorite"),
        key("r", "Related symbols"),
        key("c / C", "Choose / cycle copy format"),
        key("/", "Search"),
        key("Tab", "Switch between categories and grid"),
        key("t", "Next theme"),
        key("Left click", "Copy"),
        key("Right click", "Copy the symbol name"),
        key("q", "Quit"),
    ];

    let area = centered_rect(56, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(panel(theme, true).title(" Help ")),
        area,
    );
}

fn render_related(frame: &mut Frame, app: &App, symbol: &Symbol, selected: usize) {
    let theme = &app.theme;
    let related = app.browser.related_symbols(symbol);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Related to: ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                symbol.base_name(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} related", related.len()),
            Style::default().fg(theme.fg_dim),
        )),
        Line::default(),
    ];

    if related.is_empty() {
        lines.push(Line::from(Span::styled(
            "No related symbols found",
            Style::default().fg(theme.fg_dim),
        )));
    }

    for (i, other) in related.iter().enumerate() {
        let style = if i == selected {
            Style::default().bg(theme.selection_bg).fg(theme.fg)
        } else {
            Style::default().fg(theme.fg)
        };
        let glyph = app.browser.glyphs().glyph(&other.name).unwrap_or(MISSING_GLYPH);
        let mut spans = vec![Span::styled(format!(" {}  {}", glyph, other.name), style)];
        if app.browser.is_favorite(other) {
            spans.push(Span::styled(" ★", style.fg(theme.favorite)));
        }
        if app.browser.is_copied(other) {
            spans.push(Span::styled(" ✓", style.fg(theme.copied)));
        }
        lines.push(Line::from(spans));
    }

    // Keep the selected row in view when the family is taller than the popup
    let area = centered_rect(48, 20, frame.area());
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = (selected + 3 + 1).saturating_sub(visible) as u16;

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(panel(theme, true).title(" Related ")),
        area,
    );
}

fn render_format_picker(frame: &mut Frame, app: &App, selected: usize) {
    let theme = &app.theme;
    let active = app.browser.copy_format();

    let mut lines = Vec::new();
    for (i, format) in CopyFormat::ALL.iter().enumerate() {
        let marker = if *format == active { "● " } else { "○ " };
        let style = if i == selected {
            Style::default()
                .bg(theme.selection_bg)
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, format.label()),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", format.description()),
            Style::default().fg(theme.fg_dim),
        )));
    }

    let area = centered_rect(52, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(panel(theme, true).title(" Copy Format ")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::SymbolBrowser;
    use crate::catalog::{GlyphTable, SymbolCatalog};
    use crate::clipboard::MemoryClipboard;
    use crate::prefs::MemoryPreferenceStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let catalog = SymbolCatalog::from_symbols(vec![
            Symbol::new("star", Category::General),
            Symbol::new("star.fill", Category::General),
            Symbol::new("cloud.sun.rain.fill", Category::Weather),
        ]);
        let browser = SymbolBrowser::new(
            catalog,
            GlyphTable::from_json(r#"[["star", "☆"]]"#),
            Box::new(MemoryPreferenceStore::new()),
            Box::new(MemoryClipboard::new()),
        );
        App::new(browser, Theme::default_theme().clone())
    }

    fn draw(app: &App) -> String {
        draw_region(app, Rect::new(0, 0, 100, 40), None)
    }

    /// Render at `size` and return the text inside `region` (or the whole screen)
    fn draw_region(app: &App, size: Rect, region: Option<Rect>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(size.width, size.height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let region = region.unwrap_or(buffer.area);
        let mut out = String::new();
        for y in region.top()..region.bottom() {
            for x in region.left()..region.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("star", 14), "star");
        assert_eq!(truncate("cloud.sun.rain.fill", 10), "cloud.sun…");
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_renders_placeholder_and_count() {
        let screen = draw(&app());
        assert!(screen.contains(SEARCH_PLACEHOLDER));
        assert!(screen.contains("3 symbols"));
        assert!(screen.contains("star.fill"));
        assert!(screen.contains("Copy as: Unicode Character"));
    }

    #[test]
    fn test_renders_empty_favorites() {
        let mut app = app();
        app.select_category(Category::Favorites);
        let screen = draw(&app);
        assert!(screen.contains("No favorites yet"));
        assert!(screen.contains("0 symbols"));
    }

    #[test]
    fn test_renders_copied_marker() {
        let mut app = app();
        app.set_grid_viewport(4, 10);
        app.copy_selected();
        assert!(draw(&app).contains("Copied!"));
    }

    #[test]
    fn test_renders_related_popup() {
        let mut app = app();
        app.open_related();
        let screen = draw(&app);
        assert!(screen.contains("Related to: star"));
        assert!(screen.contains("1 related"));
    }

    #[test]
    fn test_renders_no_related_message() {
        let mut app = app();
        app.select_index(2);
        app.open_related();
        assert!(draw(&app).contains("No related symbols found"));
    }

    #[test]
    fn test_sidebar_scrolls_to_selected_category() {
        let mut app = app();
        let size = Rect::new(0, 0, 80, 24);
        let sidebar = AppLayout::new(size).sidebar_inner();

        let top = draw_region(&app, size, Some(sidebar));
        assert!(top.contains("All"));
        assert!(!top.contains("Math"));

        app.select_category(Category::Math);
        let bottom = draw_region(&app, size, Some(sidebar));
        assert!(bottom.contains("▸"));
        assert!(bottom.contains("Math"));
        assert!(!bottom.contains("Recent"));
    }
}
