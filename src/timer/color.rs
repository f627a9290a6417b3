/// An 8-bit-per-channel colour, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend from `self` (t = 0) to `to` (t = 1).
    /// Channels are truncated toward zero.
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |from: u8, to: u8| {
            let from = from as f64;
            (from + (to as f64 - from) * t) as u8
        };
        Rgb {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
        }
    }
}

/// Arc colour for a countdown: white with the whole session ahead, green
/// once it has run out. A zero total is treated as fully elapsed.
pub fn ring_color(remaining: u32, total: u32) -> Rgb {
    let left = if total == 0 {
        0.0
    } else {
        remaining as f64 / total as f64
    };
    Rgb::WHITE.lerp(Rgb::GREEN, 1.0 - left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(ring_color(1200, 1200), Rgb::WHITE);
        assert_eq!(ring_color(0, 1200), Rgb::GREEN);
    }

    #[test]
    fn one_second_into_twenty_minutes() {
        assert_eq!(ring_color(1199, 1200), Rgb::new(254, 255, 254));
    }

    #[test]
    fn halfway_is_truncated() {
        // 255 - 127.5 = 127.5, truncated
        assert_eq!(ring_color(30, 60), Rgb::new(127, 255, 127));
    }

    #[test]
    fn red_and_blue_fall_monotonically() {
        let total = 600;
        let mut last = ring_color(total, total);
        for remaining in (0..total).rev() {
            let c = ring_color(remaining, total);
            assert!(c.r <= last.r);
            assert!(c.b <= last.b);
            assert_eq!(c.g, 255);
            last = c;
        }
    }

    #[test]
    fn zero_total_is_green() {
        assert_eq!(ring_color(0, 0), Rgb::GREEN);
    }

    #[test]
    fn out_of_range_t_is_clamped() {
        assert_eq!(Rgb::WHITE.lerp(Rgb::GREEN, -2.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.lerp(Rgb::GREEN, 7.5), Rgb::GREEN);
        assert_eq!(Rgb::WHITE.lerp(Rgb::GREEN, f64::NAN), Rgb::WHITE);
    }
}
