use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// The `MM:SS` readout under the ring.
pub struct ClockWidget<'a> {
    text: &'a str,
    running: bool,
    complete: bool,
}

impl<'a> ClockWidget<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            running: false,
            complete: false,
        }
    }

    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }
}

impl Widget for ClockWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.complete {
            Color::Green
        } else if self.running {
            Color::White
        } else {
            Color::Gray
        };

        // Letter-spaced so the digits read larger than body text.
        let spaced: String = self
            .text
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let line = Line::from(vec![Span::styled(
            spaced,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn renders_spaced_digits_centered() {
        let area = Rect::new(0, 0, 21, 1);
        let mut buf = Buffer::empty(area);
        ClockWidget::new("19:59").running(true).render(area, &mut buf);
        let text = row_text(&buf, 0);
        assert_eq!(text.trim(), "1 9 : 5 9");
        assert!(text.starts_with(' '));
    }

    #[test]
    fn complete_clock_is_green() {
        let area = Rect::new(0, 0, 9, 1);
        let mut buf = Buffer::empty(area);
        ClockWidget::new("00:00").complete(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }
}
