use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::Widget;

use crate::timer::color::Rgb;
use crate::timer::RingState;

const CHECKMARK: &str = "✔";

/// Fraction of the available half-extent the ring radius takes up.
const RADIUS_SCALE: f64 = 0.85;

/// Braille dots per unit of arc length, so the arc reads as a solid line.
const POINTS_PER_UNIT: f64 = 4.0;

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Circular countdown indicator drawn on a braille canvas.
pub struct RingWidget {
    state: RingState,
}

impl RingWidget {
    pub fn new(state: RingState) -> Self {
        Self { state }
    }
}

impl Widget for RingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 2 {
            return;
        }

        // One x unit per column, two y units per row: braille dots come out
        // square, so the circle is round on screen.
        let width = area.width as f64;
        let height = area.height as f64 * 2.0;
        let (cx, cy) = (width / 2.0, height / 2.0);
        let radius = cx.min(cy) * RADIUS_SCALE;

        let white: Color = Rgb::WHITE.into();
        let green: Color = Rgb::GREEN.into();
        let state = self.state;

        Canvas::default()
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .marker(Marker::Braille)
            .paint(move |ctx| match state {
                RingState::Idle => {
                    ctx.draw(&Circle {
                        x: cx,
                        y: cy,
                        radius,
                        color: white,
                    });
                }
                RingState::Counting {
                    sweep_degrees,
                    color,
                } => {
                    ctx.draw(&Circle {
                        x: cx,
                        y: cy,
                        radius,
                        color: white,
                    });
                    let arc = arc_points(cx, cy, radius, sweep_degrees);
                    ctx.draw(&Points {
                        coords: &arc,
                        color: color.into(),
                    });
                }
                RingState::Complete => {
                    ctx.draw(&Circle {
                        x: cx,
                        y: cy,
                        radius,
                        color: green,
                    });
                    ctx.print(
                        cx,
                        cy,
                        Span::styled(
                            CHECKMARK,
                            Style::default().fg(green).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            })
            .render(area, buf);
    }
}

/// Points along an arc that starts at 12 o'clock and runs clockwise for
/// `sweep_degrees` (clamped to one full turn).
pub fn arc_points(cx: f64, cy: f64, radius: f64, sweep_degrees: f64) -> Vec<(f64, f64)> {
    let sweep = sweep_degrees.clamp(0.0, 360.0);
    if sweep == 0.0 || radius <= 0.0 {
        return Vec::new();
    }

    let length = radius * sweep.to_radians();
    let segments = (length * POINTS_PER_UNIT).ceil().max(1.0) as usize;

    (0..=segments)
        .map(|i| {
            let deg = 90.0 - sweep * (i as f64 / segments as f64);
            let rad = deg.to_radians();
            (cx + radius * rad.cos(), cy + radius * rad.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn empty_sweep_has_no_points() {
        assert!(arc_points(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(arc_points(0.0, 0.0, 10.0, -15.0).is_empty());
        assert!(arc_points(0.0, 0.0, 0.0, 90.0).is_empty());
    }

    #[test]
    fn arc_starts_at_twelve_o_clock() {
        let pts = arc_points(5.0, 5.0, 2.0, 180.0);
        assert!(close(pts[0], (5.0, 7.0)));
    }

    #[test]
    fn quarter_sweep_ends_at_three_o_clock() {
        let pts = arc_points(0.0, 0.0, 1.0, 90.0);
        assert!(close(*pts.last().unwrap(), (1.0, 0.0)));
        // Clockwise: the right half, upper quadrant only.
        assert!(pts.iter().all(|&(x, y)| x >= -1e-9 && y >= -1e-9));
    }

    #[test]
    fn half_sweep_ends_at_six_o_clock() {
        let pts = arc_points(0.0, 0.0, 3.0, 180.0);
        assert!(close(*pts.last().unwrap(), (0.0, -3.0)));
        assert!(pts.iter().all(|&(x, _)| x >= -1e-9));
    }

    #[test]
    fn points_lie_on_circle() {
        let pts = arc_points(4.0, -2.0, 6.0, 359.7);
        for (x, y) in pts {
            let r = ((x - 4.0).powi(2) + (y + 2.0).powi(2)).sqrt();
            assert!((r - 6.0).abs() < 1e-9);
        }
    }

    #[test]
    fn oversweep_is_one_full_turn() {
        let full = arc_points(0.0, 0.0, 5.0, 360.0);
        let over = arc_points(0.0, 0.0, 5.0, 720.0);
        assert_eq!(full.len(), over.len());
        assert!(close(*over.last().unwrap(), (0.0, 5.0)));
    }

    #[test]
    fn longer_arcs_get_more_points() {
        let short = arc_points(0.0, 0.0, 10.0, 30.0);
        let long = arc_points(0.0, 0.0, 10.0, 300.0);
        assert!(long.len() > short.len());
    }

    #[test]
    fn renders_each_state_without_panicking() {
        let area = Rect::new(0, 0, 30, 15);
        for state in [
            RingState::Idle,
            RingState::Counting {
                sweep_degrees: 200.0,
                color: Rgb::new(120, 255, 120),
            },
            RingState::Complete,
        ] {
            let mut buf = Buffer::empty(area);
            RingWidget::new(state).render(area, &mut buf);
        }
    }

    #[test]
    fn complete_state_shows_checkmark() {
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);
        RingWidget::new(RingState::Complete).render(area, &mut buf);
        let found = buf.content().iter().any(|cell| cell.symbol() == CHECKMARK);
        assert!(found);
    }

    #[test]
    fn tiny_area_is_skipped() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        RingWidget::new(RingState::Idle).render(area, &mut buf);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
