use crate::app::App;
use crate::ui::widgets::radar::series_color;
use happiness_dashboard::views::FACES_PER_COUNTRY;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Horizontal room given to the country name before the faces start.
const LABEL_WIDTH: f64 = 4.0;
const FACE_RADIUS: f64 = 0.4;

pub fn render_glyph_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let glyph = &app.dashboard.views().glyph;
    let block = Block::default()
        .title(" Life Ladder (one face = 2 points) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if glyph.rows().is_empty() {
        let paragraph = Paragraph::new("No countries selected")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let rows = glyph.rows().len() as f64;
    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, LABEL_WIDTH + FACES_PER_COUNTRY as f64])
        .y_bounds([0.0, rows])
        .paint(|ctx| {
            for (index, row) in glyph.rows().iter().enumerate() {
                let y = rows - index as f64 - 0.5;
                let color = series_color(index);
                ctx.print(0.0, y, row.country.clone());

                for (face, fill) in row.fills.iter().enumerate() {
                    let x = LABEL_WIDTH + face as f64 + 0.5;
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: FACE_RADIUS,
                        color: Color::DarkGray,
                    });
                    // Concentric rings stand in for a solid fill.
                    let mut radius = FACE_RADIUS * fill;
                    while radius > 0.05 {
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius,
                            color,
                        });
                        radius -= 0.1;
                    }
                }
            }
        });

    f.render_widget(canvas, area);
}
