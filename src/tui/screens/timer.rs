use std::ops::ControlFlow;
use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::audio::AmbientPlayer;
use crate::sound::Sound;
use crate::timer::{RingState, TimerController};
use crate::tui::event::{AppEvent, EventHandler, FRAME_RATE};
use crate::tui::input::{self, Action};
use crate::tui::widgets::clock::ClockWidget;
use crate::tui::widgets::controls::ControlsWidget;
use crate::tui::widgets::ring::RingWidget;
use crate::tui::Tui;

/// Run the timer screen until the user quits.
///
/// Every pass through the loop first lets the controller catch up on any
/// countdown ticks that came due, then redraws and waits for the next event.
pub fn run<P: AmbientPlayer>(
    terminal: &mut Tui,
    controller: &mut TimerController<P>,
) -> anyhow::Result<()> {
    let events = EventHandler::new(FRAME_RATE);
    let missing = controller.library().missing();

    loop {
        controller.advance(Instant::now());

        terminal.draw(|frame| {
            let area = frame.area();
            render_timer(frame, area, controller, &missing);
        })?;

        match events.next()? {
            AppEvent::Key(key) => {
                if let Some(action) = input::handle_key(key) {
                    if apply(controller, action, Instant::now()).is_break() {
                        break;
                    }
                }
            }
            AppEvent::Frame | AppEvent::Resize => {}
        }
    }

    controller.stop();
    Ok(())
}

/// Apply one user action to the controller.
pub fn apply<P: AmbientPlayer>(
    controller: &mut TimerController<P>,
    action: Action,
    now: Instant,
) -> ControlFlow<()> {
    match action {
        Action::Start => controller.start(now),
        Action::Stop => controller.stop(),
        Action::Toggle => {
            if controller.is_running() {
                controller.stop();
            } else {
                controller.start(now);
            }
        }
        Action::Reset => controller.reset(),
        Action::AdjustDuration(delta) => {
            let duration = controller.duration().offset(delta);
            controller.set_duration(duration);
        }
        Action::AdjustVolume(delta) => {
            let volume = controller.volume().offset(delta);
            controller.set_volume(volume);
        }
        Action::NextSound => controller.select_sound(controller.sound().next()),
        Action::PrevSound => controller.select_sound(controller.sound().prev()),
        Action::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn render_timer<P: AmbientPlayer>(
    frame: &mut Frame,
    area: Rect,
    controller: &TimerController<P>,
    missing: &[Sound],
) {
    let outer = Block::default()
        .title(" Meditation Timer ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::vertical([
        Constraint::Min(6),    // ring
        Constraint::Length(1), // clock
        Constraint::Length(1), // spacer
        Constraint::Length(5), // controls
        Constraint::Length(1), // status
        Constraint::Length(1), // key hints
    ])
    .split(inner);

    // Two columns per row keeps the ring's bounding box square.
    let ring_width = rows[0].height.saturating_mul(2).min(rows[0].width);
    let ring_cols = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(ring_width),
        Constraint::Fill(1),
    ])
    .split(rows[0]);
    frame.render_widget(RingWidget::new(controller.ring()), ring_cols[1]);

    let clock = controller.clock();
    frame.render_widget(
        ClockWidget::new(&clock)
            .running(controller.is_running())
            .complete(controller.ring() == RingState::Complete),
        rows[1],
    );

    frame.render_widget(
        ControlsWidget::new(controller.sound(), controller.volume(), controller.duration())
            .with_missing(missing.to_vec()),
        rows[3],
    );

    frame.render_widget(Paragraph::new(status_line(controller)), rows[4]);

    let hints: Vec<Span> = input::key_hints(controller.is_running())
        .into_iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(
                    format!("  [{key}]"),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {desc}")),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[5]);
}

fn status_line<P: AmbientPlayer>(controller: &TimerController<P>) -> Line<'static> {
    if let Some(status) = controller.status() {
        let color = if controller.ring() == RingState::Complete {
            Color::Green
        } else {
            Color::Yellow
        };
        return Line::from(Span::styled(format!("  {status}"), Style::default().fg(color)));
    }

    let session = controller.session();
    let text = if session.is_running() {
        format!("  Running · {}", controller.sound())
    } else if session.remaining_secs() < session.total_secs() {
        "  Stopped".to_string()
    } else {
        "  Ready".to_string()
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::time::Duration;

    use crate::audio::{SilentPlayer, Volume};
    use crate::sound::SoundLibrary;
    use crate::timer::Minutes;

    fn controller() -> TimerController<SilentPlayer> {
        TimerController::new(
            Minutes::new(10).unwrap(),
            Sound::Ocean,
            Volume::default(),
            SoundLibrary::new(Path::new("/sounds"), &BTreeMap::new()),
            SilentPlayer::new(),
        )
    }

    #[test]
    fn toggle_starts_and_stops() {
        let mut c = controller();
        let now = Instant::now();
        assert!(apply(&mut c, Action::Toggle, now).is_continue());
        assert!(c.is_running());
        assert!(apply(&mut c, Action::Toggle, now).is_continue());
        assert!(!c.is_running());
    }

    #[test]
    fn duration_keys_step_and_clamp() {
        let mut c = controller();
        let now = Instant::now();
        assert!(apply(&mut c, Action::AdjustDuration(1), now).is_continue());
        assert_eq!(c.duration().get(), 11);
        assert_eq!(c.clock(), "11:00");
        for _ in 0..100 {
            assert!(apply(&mut c, Action::AdjustDuration(-1), now).is_continue());
        }
        assert_eq!(c.duration().get(), 1);
    }

    #[test]
    fn volume_keys_step_and_clamp() {
        let mut c = controller();
        let now = Instant::now();
        assert!(apply(&mut c, Action::AdjustVolume(0.05), now).is_continue());
        assert_eq!(c.volume().get(), 0.55);
        for _ in 0..30 {
            assert!(apply(&mut c, Action::AdjustVolume(0.05), now).is_continue());
        }
        assert_eq!(c.volume().get(), 1.0);
    }

    #[test]
    fn sound_keys_cycle() {
        let mut c = controller();
        let now = Instant::now();
        assert!(apply(&mut c, Action::NextSound, now).is_continue());
        assert_eq!(c.sound(), Sound::Forest);
        assert!(apply(&mut c, Action::PrevSound, now).is_continue());
        assert!(apply(&mut c, Action::PrevSound, now).is_continue());
        assert_eq!(c.sound(), Sound::Waterfall);
    }

    #[test]
    fn reset_after_running() {
        let mut c = controller();
        let now = Instant::now();
        assert!(apply(&mut c, Action::Start, now).is_continue());
        c.advance(now + Duration::from_secs(5));
        assert!(apply(&mut c, Action::Reset, now).is_continue());
        assert_eq!(c.clock(), "10:00");
        assert!(!c.is_running());
    }

    #[test]
    fn quit_breaks() {
        let mut c = controller();
        assert!(apply(&mut c, Action::Quit, Instant::now()).is_break());
    }

    #[test]
    fn status_reflects_state() {
        let mut c = controller();
        let now = Instant::now();
        let text = |c: &TimerController<SilentPlayer>| status_line(c).to_string();
        assert!(text(&c).contains("Ready"));
        assert!(apply(&mut c, Action::Start, now).is_continue());
        assert!(text(&c).contains("Running"));
        c.advance(now + Duration::from_secs(2));
        assert!(apply(&mut c, Action::Stop, now).is_continue());
        assert!(text(&c).contains("Stopped"));
    }
}
