use crate::app::App;
use happiness_dashboard::views::radar::{axis_label, level_value, spoke};
use happiness_dashboard::views::{RADAR_AXES, RADAR_LEVELS};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// One color per selectable country.
pub const SERIES_COLORS: [Color; 6] = [
    Color::Rgb(27, 158, 119),
    Color::Rgb(217, 95, 2),
    Color::Rgb(117, 112, 179),
    Color::Rgb(231, 41, 138),
    Color::Rgb(102, 166, 30),
    Color::Rgb(230, 171, 2),
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Closed polygon through `points`.
fn polygon_lines(points: &[(f64, f64)], color: Color) -> Vec<CanvasLine> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&(x1, y1), &(x2, y2))| CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        })
        .collect()
}

pub fn render_radar_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let radar = &app.dashboard.views().radar;
    let block = Block::default()
        .title(" Radar ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if area.width < 8 || area.height < 6 {
        return;
    }

    if radar.series().is_empty() {
        let paragraph = Paragraph::new("Select countries on the map")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let legend = TextLine::from(
        radar
            .series()
            .iter()
            .enumerate()
            .map(|(index, series)| {
                Span::styled(
                    format!(" {} ", series.country),
                    Style::default().fg(series_color(index)),
                )
            })
            .collect::<Vec<_>>(),
    );

    let canvas = Canvas::default()
        .block(block.title_bottom(legend))
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            for level in 0..RADAR_LEVELS {
                let radius = level_value(level);
                let ring: Vec<_> = (0..RADAR_AXES.len())
                    .map(|axis| {
                        let (x, y) = spoke(axis);
                        (x * radius, y * radius)
                    })
                    .collect();
                for line in polygon_lines(&ring, Color::DarkGray) {
                    ctx.draw(&line);
                }
            }

            for (axis, metric) in RADAR_AXES.iter().enumerate() {
                let (x, y) = spoke(axis);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: Color::Gray,
                });
                ctx.print(x * 1.1, y * 1.1, axis_label(*metric));
            }

            ctx.layer();
            for (index, series) in radar.series().iter().enumerate() {
                for line in polygon_lines(&series.vertices(), series_color(index)) {
                    ctx.draw(&line);
                }
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygons_close_on_themselves() {
        let lines = polygon_lines(&[(0.0, 1.0), (1.0, 0.0), (0.0, -1.0)], Color::Red);
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[2].x2, lines[2].y2), (0.0, 1.0));
    }

    #[test]
    fn colors_repeat_after_the_palette() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
    }
}
