//! The menu pane: every catalog item with its add/stepper affordance.

use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_RED, CATEGORY_TEXT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let items = app.session().catalog.items();
    if items.is_empty() {
        return;
    }

    let currency = app.currency();
    let visible = inner.height as usize;
    let selected = app.selected().min(items.len() - 1);
    // Keep the cursor inside the window.
    let offset = selected.saturating_sub(visible.saturating_sub(1));
    let width = inner.width as usize;

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, item)| {
            let cursor = if idx == selected { "❯ " } else { "  " };
            let stepper = if item.show_stepper {
                format!("[- {} +]", item.quantity)
            } else {
                "[  Add ]".to_string()
            };
            let price = format!("{currency}{:.2} ", item.entry.price);

            let used = cursor.chars().count()
                + stepper.chars().count()
                + 2
                + item.entry.name.chars().count()
                + item.entry.category.chars().count()
                + 2
                + price.chars().count();
            let padding = width.saturating_sub(used).max(1);

            let name_style = if idx == selected {
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            let stepper_style = if item.quantity > 0 {
                Style::default().fg(BRAND_RED)
            } else {
                Style::default().fg(CATEGORY_TEXT)
            };
            let row_style = if item.active {
                Style::default().bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(cursor.to_string(), Style::default().fg(BRAND_RED)),
                Span::styled(stepper, stepper_style),
                Span::raw("  "),
                Span::styled(item.entry.name.clone(), name_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(item.entry.category.clone(), Style::default().fg(CATEGORY_TEXT)),
                Span::raw("  "),
                Span::styled(price, Style::default().fg(PRICE_TEXT)),
            ])
            .style(row_style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
