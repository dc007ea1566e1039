//! The order-confirmation modal, shown while the confirmation flag is set.

use crate::ui::app::App;
use crate::ui::centered_rect;
use crate::ui::theme::{CATEGORY_TEXT, HEADER_TEXT, PRICE_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &App) {
    let session = app.session();
    let currency = app.currency();
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Order Confirmed ",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_OK));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            " We hope you enjoy your food!",
            Style::default().fg(CATEGORY_TEXT),
        )),
        Line::default(),
    ];

    for line in session.cart.lines() {
        let left = format!(
            " {}x {} @ {currency}{:.2}",
            line.quantity, line.name, line.price
        );
        let right = format!("{currency}{:.2} ", line.subtotal());
        let padding = width
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count())
            .max(1);
        lines.push(Line::from(vec![
            Span::styled(left, Style::default().fg(HEADER_TEXT)),
            Span::raw(" ".repeat(padding)),
            Span::styled(right, Style::default().fg(PRICE_TEXT)),
        ]));
    }

    lines.push(Line::default());
    let label = " Order Total";
    let total = format!("{currency}{:.2} ", session.cart.total());
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
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " [Enter] Start New Order",
        Style::default().fg(STATUS_OK),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
