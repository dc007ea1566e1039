//! The cart pane: one block per line, the running total, the confirm hint.

use crate::ui::app::App;
use crate::ui::theme::{
    BRAND_RED, CATEGORY_TEXT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let cart = &app.session().cart;
    let title = format!(" Your Cart ({}) ", cart.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if cart.is_empty() {
        let message = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Your added items will appear here",
                Style::default().fg(CATEGORY_TEXT),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let currency = app.currency();
    let width = inner.width as usize;
    let mut lines = Vec::new();

    for line in cart.lines() {
        lines.push(Line::from(Span::styled(
            format!(" {}", line.name),
            Style::default().fg(HEADER_TEXT),
        )));
        let quantity = format!(" {}x @ {currency}{:.2}", line.quantity, line.price);
        let subtotal = format!("{currency}{:.2} ", line.subtotal());
        let padding = width
            .saturating_sub(quantity.chars().count())
            .saturating_sub(subtotal.chars().count())
            .max(1);
        lines.push(Line::from(vec![
            Span::styled(quantity, Style::default().fg(BRAND_RED)),
            Span::raw(" ".repeat(padding)),
            Span::styled(subtotal, Style::default().fg(PRICE_TEXT)),
        ]));
    }

    lines.push(Line::default());
    let label = " Order Total";
    let total = format!("{currency}{:.2} ", cart.total());
    let padding = width
        .saturating_sub(label.chars().count())
        .saturating_sub(total.chars().count())
        .max(1);
    lines.push(Line::from(vec![
        Span::styled(label, Style::default().fg(HEADER_TEXT)),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            total,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        " This is a carbon-neutral delivery",
        Style::default().fg(STATUS_OK).add_modifier(Modifier::DIM),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " c: Confirm Order",
        Style::default().fg(CATEGORY_TEXT),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
