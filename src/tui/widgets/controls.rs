use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph, Widget};

use crate::audio::Volume;
use crate::sound::Sound;
use crate::timer::session::MAX_MINUTES;
use crate::timer::Minutes;

/// Sound picker, volume gauge and duration gauge, stacked in one panel.
pub struct ControlsWidget {
    sound: Sound,
    volume: Volume,
    duration: Minutes,
    /// Sounds whose asset is missing are dimmed and flagged.
    missing: Vec<Sound>,
}

impl ControlsWidget {
    pub fn new(sound: Sound, volume: Volume, duration: Minutes) -> Self {
        Self {
            sound,
            volume,
            duration,
            missing: Vec::new(),
        }
    }

    pub fn with_missing(mut self, missing: Vec<Sound>) -> Self {
        self.missing = missing;
        self
    }
}

impl Widget for ControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Session ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // sound
            Constraint::Length(1), // volume
            Constraint::Length(1), // duration
        ])
        .split(inner);

        Paragraph::new(sound_line(self.sound, &self.missing)).render(rows[0], buf);

        LineGauge::default()
            .label(format!("Volume   {:>4}", self.volume.to_string()))
            .filled_style(Style::default().fg(Color::Cyan))
            .ratio(self.volume.get().clamp(0.0, 1.0) as f64)
            .render(rows[1], buf);

        LineGauge::default()
            .label(format!("Duration {:>6}", self.duration.to_string()))
            .filled_style(Style::default().fg(Color::Green))
            .ratio(self.duration.get() as f64 / MAX_MINUTES as f64)
            .render(rows[2], buf);
    }
}

fn sound_line(selected: Sound, missing: &[Sound]) -> Line<'static> {
    let mut spans = vec![Span::raw("Sound    ")];
    for sound in Sound::ALL {
        let absent = missing.contains(&sound);
        let mut style = if sound == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if absent {
            style = style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(format!(" {} ", sound.name()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_every_sound_and_levels() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buf = Buffer::empty(area);
        ControlsWidget::new(Sound::Forest, Volume::default(), Minutes::default())
            .render(area, &mut buf);
        let text = all_text(&buf);
        for sound in Sound::ALL {
            assert!(text.contains(sound.name()), "missing {sound}");
        }
        assert!(text.contains("50%"));
        assert!(text.contains("20 min"));
    }

    #[test]
    fn selected_sound_is_highlighted() {
        let line = sound_line(Sound::Wind, &[]);
        let wind = line
            .spans
            .iter()
            .find(|s| s.content.trim() == "wind")
            .unwrap();
        assert_eq!(wind.style.bg, Some(Color::White));
    }

    #[test]
    fn missing_sound_is_crossed_out() {
        let line = sound_line(Sound::Ocean, &[Sound::Waterfall]);
        let waterfall = line
            .spans
            .iter()
            .find(|s| s.content.trim() == "waterfall")
            .unwrap();
        assert!(waterfall.style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
