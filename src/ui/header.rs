use crate::ui::theme::{BRAND_ORANGE, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let accent_style = Style::default()
            .fg(BRAND_ORANGE)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("Friends who ", text_style),
            Span::styled("SPLIT", accent_style),
            Span::styled(" bills ", text_style),
            Span::styled("STAY", accent_style),
            Span::styled(" together!", text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
