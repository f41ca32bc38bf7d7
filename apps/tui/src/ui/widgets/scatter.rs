use crate::app::{App, Focus};
use happiness_dashboard::data::Extent;
use happiness_dashboard::views::ScatterView;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use super::map::SELECTED_COLOR;

fn bounds(domain: Option<Extent>) -> [f64; 2] {
    domain.map_or([0.0, 1.0], |extent| {
        if extent.max > extent.min {
            [extent.min, extent.max]
        } else {
            [extent.min, extent.min + 1.0]
        }
    })
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|value| Span::raw(format!("{value:.1}")))
        .collect()
}

pub fn render_scatter_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let scatter = &app.dashboard.views().scatter;
    let focused = app.focus == Focus::Scatter;
    let border = if focused { Color::Cyan } else { Color::Gray };
    let x_metric = scatter.x_metric();

    let mut block = Block::default()
        .title(format!(" {} vs {} ", ScatterView::Y_METRIC, x_metric))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if scatter.points().is_empty() {
        let paragraph = Paragraph::new("No points for this year")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let mut others = Vec::new();
    let mut selected = Vec::new();
    for point in scatter.points() {
        if point.selected {
            selected.push((point.x, point.y));
        } else {
            others.push((point.x, point.y));
        }
    }

    let cursor = scatter
        .points()
        .get(app.scatter_cursor)
        .filter(|_| focused);
    let cursor_data: Vec<(f64, f64)> = cursor.map(|point| (point.x, point.y)).into_iter().collect();
    if let Some(point) = cursor {
        block = block.title_bottom(format!(
            " {}: {:.3}, {:.3} ",
            point.country, point.x, point.y
        ));
    }

    let datasets = vec![
        Dataset::default()
            .name("Countries")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Gray))
            .data(&others),
        Dataset::default()
            .name("Selected")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(SELECTED_COLOR))
            .data(&selected),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .data(&cursor_data),
    ];

    let x_bounds = bounds(scatter.x_domain());
    let y_bounds = bounds(scatter.y_domain());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(x_metric.label())
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(ScatterView::Y_METRIC.label())
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_domains_get_a_unit_span() {
        assert_eq!(bounds(None), [0.0, 1.0]);
        assert_eq!(bounds(Some(Extent { min: 0.0, max: 0.0 })), [0.0, 1.0]);
        assert_eq!(bounds(Some(Extent { min: -0.2, max: 0.4 })), [-0.2, 0.4]);
    }

    #[test]
    fn labels_span_the_axis() {
        let labels: Vec<String> = axis_labels([0.0, 8.0])
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(labels, ["0.0", "4.0", "8.0"]);
    }
}
