use crate::session::SessionState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    /// Key hints follow the view state: while an error or the
    /// confirmation is shown, only the actions that are actually
    /// routed are advertised.
    pub fn new(session: &SessionState) -> Self {
        let hints = if session.has_error() {
            " Enter: Dismiss │ q: Quit"
        } else if session.confirmed {
            " Enter: Start New Order │ q: Quit"
        } else {
            " ↑/↓: Browse │ +/-: Quantity │ x: Remove │ c: Confirm │ q: Quit"
        };
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count: the hints contain
        // multi-byte glyphs.
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
