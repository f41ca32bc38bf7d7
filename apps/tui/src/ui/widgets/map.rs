use crate::app::{App, Focus};
use crate::ui::widgets::tables::scroll_offset;
use happiness_dashboard::views::Fill;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Light end of the choropleth scale.
const SCALE_LOW: (u8, u8, u8) = (255, 255, 204);
/// Dark end of the choropleth scale.
const SCALE_HIGH: (u8, u8, u8) = (37, 52, 148);

pub const MAX_COLOR: Color = Color::Rgb(26, 152, 80);
pub const MIN_COLOR: Color = Color::Rgb(215, 48, 39);
pub const SELECTED_COLOR: Color = Color::Rgb(254, 178, 76);
pub const NO_DATA_COLOR: Color = Color::DarkGray;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(low: u8, high: u8, t: f64) -> u8 {
    (f64::from(high) - f64::from(low))
        .mul_add(t, f64::from(low))
        .round()
        .clamp(0.0, 255.0) as u8
}

pub fn scale_color(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::Rgb(
        lerp(SCALE_LOW.0, SCALE_HIGH.0, t),
        lerp(SCALE_LOW.1, SCALE_HIGH.1, t),
        lerp(SCALE_LOW.2, SCALE_HIGH.2, t),
    )
}

pub const fn fill_color(fill: Fill) -> Color {
    match fill {
        Fill::MaxMarker => MAX_COLOR,
        Fill::MinMarker => MIN_COLOR,
        Fill::Selected => SELECTED_COLOR,
        Fill::NoData => NO_DATA_COLOR,
        Fill::Scale(_) => Color::Reset,
    }
}

fn fill_style(fill: Fill) -> Style {
    match fill {
        Fill::Scale(t) => {
            let fg = if t > 0.5 { Color::White } else { Color::Black };
            Style::default().bg(scale_color(t)).fg(fg)
        }
        Fill::MaxMarker | Fill::MinMarker => Style::default()
            .bg(fill_color(fill))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Fill::Selected => Style::default().bg(fill_color(fill)).fg(Color::Black),
        Fill::NoData => Style::default().fg(fill_color(fill)),
    }
}

const fn fill_mark(fill: Fill) -> &'static str {
    match fill {
        Fill::MaxMarker => "▲ max",
        Fill::MinMarker => "▼ min",
        Fill::Selected => "● selected",
        Fill::NoData | Fill::Scale(_) => "",
    }
}

pub fn render_map_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let map = &app.dashboard.views().map;
    let focused = app.focus == Focus::Map;
    let border = if focused { Color::Cyan } else { Color::Gray };

    let legend = map
        .legend_stops()
        .map_or_else(|| "no data".to_string(), |(lo, hi)| format!("{lo} - {hi}"));
    let mut block = Block::default()
        .title(format!(" {} ({legend}) ", map.legend_title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(region) = map.regions().get(app.map_cursor).filter(|_| focused) {
        block = block.title_bottom(format!(" {}: {} ", region.country, region.tooltip));
    }

    if map.regions().is_empty() {
        let paragraph = Paragraph::new(format!("No countries reported for {}", app.year()))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Country"),
        Cell::from("Value"),
        Cell::from(""),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = map.regions().len();
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.map_cursor);

    let rows = map
        .regions()
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, region)| {
            let mut style = fill_style(region.fill);
            if focused && index == app.map_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let value = region
                .value
                .map_or_else(|| "N/A".to_string(), |value| format!("{value:.3}"));
            Row::new(vec![
                Cell::from(region.country.clone()),
                Cell::from(value),
                Cell::from(fill_mark(region.fill)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}
