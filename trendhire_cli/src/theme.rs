/// Shared colours and styles for the TrendHire TUI
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub high_contrast: bool,
}

impl Theme {
    pub fn new(high_contrast: bool) -> Self {
        Self { high_contrast }
    }

    pub fn accent(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(45, 212, 191) // Teal #2DD4BF
        }
    }

    pub fn border_style(&self) -> Style {
        if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent()).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Salary line colour (#00CC96)
    pub fn series(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(0, 204, 150)
        }
    }

    /// Colour for `value` on a viridis-like ramp between `min` and `max`
    pub fn scale(&self, value: f64, min: f64, max: f64) -> Color {
        if self.high_contrast {
            return Color::White;
        }
        let t = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        viridis(t)
    }
}

const VIRIDIS_STOPS: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (68, 1, 84)),
    (0.25, (59, 82, 139)),
    (0.5, (33, 145, 140)),
    (0.75, (94, 201, 98)),
    (1.0, (253, 231, 37)),
];

/// Piecewise-linear viridis approximation, `t` in [0, 1]
pub fn viridis(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    for pair in VIRIDIS_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
            return Color::Rgb(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, last) = VIRIDIS_STOPS[VIRIDIS_STOPS.len() - 1];
    Color::Rgb(last.0, last.1, last.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(viridis(2.0), Color::Rgb(253, 231, 37));
    }

    #[test]
    fn test_scale_degenerate_range() {
        let theme = Theme::default();
        assert_eq!(theme.scale(5.0, 5.0, 5.0), Color::Rgb(253, 231, 37));
        assert_eq!(Theme::new(true).scale(1.0, 0.0, 2.0), Color::White);
    }
}
