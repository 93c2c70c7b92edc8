/// Radial (spider) chart drawn on a braille canvas
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Widget,
    },
};
use std::f64::consts::{FRAC_PI_2, TAU};

const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

pub struct RadarChart<'a> {
    title: &'a str,
    axes: &'a [(String, f64)],
    max: f64,
    theme: Theme,
}

impl<'a> RadarChart<'a> {
    /// `axes` are (label, value) pairs plotted against a 0..`max` radius
    pub fn new(title: &'a str, axes: &'a [(String, f64)], max: f64) -> Self {
        Self {
            title,
            axes,
            max,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Position of axis `index` of `count` at `radius`, first axis at 12 o'clock
pub fn polar_point(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64;
    (radius * angle.cos(), radius * angle.sin())
}

impl<'a> Widget for RadarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(format!(" {} ", self.title), self.theme.title_style()));

        let count = self.axes.len();
        let accent = self.theme.accent();
        let grid = Color::DarkGray;
        let max = if self.max > 0.0 { self.max } else { 1.0 };
        let dim = self.theme.dim();

        let values: Vec<(f64, f64)> = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, (_, value))| polar_point(i, count, (value / max).clamp(0.0, 1.0)))
            .collect();

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-1.8, 1.8])
            .y_bounds([-1.3, 1.3])
            .paint(|ctx| {
                if count == 0 {
                    return;
                }

                for ring in RINGS {
                    for i in 0..count {
                        let (x1, y1) = polar_point(i, count, ring);
                        let (x2, y2) = polar_point((i + 1) % count, count, ring);
                        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, grid));
                    }
                }
                for i in 0..count {
                    let (x, y) = polar_point(i, count, 1.0);
                    ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, grid));
                }

                ctx.layer();

                for i in 0..count {
                    let (x1, y1) = values[i];
                    let (x2, y2) = values[(i + 1) % count];
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, accent));
                    ctx.draw(&CanvasLine::new(0.0, 0.0, x1, y1, accent));
                }
                ctx.draw(&Points {
                    coords: &values,
                    color: accent,
                });

                for (i, (label, value)) in self.axes.iter().enumerate() {
                    let (x, y) = polar_point(i, count, 1.12);
                    // Shift left-side labels so they end at the ring
                    let x = if x < -0.05 { x - label.len() as f64 * 0.035 } else { x };
                    ctx.print(x, y, Span::styled(format!("{} {}", label, value), dim));
                }
            });

        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_axis_points_up() {
        let (x, y) = polar_point(0, 5, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_axes_go_clockwise() {
        let (x, _) = polar_point(1, 4, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
    }
}
