use crate::ui::theme::{BRAND_RED, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    line_count: usize,
    total: f64,
    currency: String,
}

impl Header {
    pub fn new(line_count: usize, total: f64, currency: &str) -> Self {
        Self {
            line_count,
            total,
            currency: currency.to_string(),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let title = " Desserts";
        let summary = format!(
            "Your Cart ({}) · {}{:.2} ",
            self.line_count, self.currency, self.total
        );

        // Pad by char count, not byte count (currency may be multi-byte).
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(title.chars().count())
            .saturating_sub(summary.chars().count());

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(summary, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
