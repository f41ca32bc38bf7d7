// UI module for the happiness dashboard
// Lays out the four coordinated panels around a header and status bar

pub mod widgets;

use crate::app::App;
use happiness_dashboard::domain::{YEAR_MAX, YEAR_MIN};
use happiness_dashboard::step::LAST_STEP;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use widgets::glyph::render_glyph_panel;
use widgets::map::render_map_panel;
use widgets::popup::render_popup_frame;
use widgets::radar::render_radar_panel;
use widgets::scatter::render_scatter_panel;

const SHORTCUTS: [(&str, &str); 9] = [
    ("j/k", "step"),
    ("←/→", "year"),
    ("↑/↓", "cursor"),
    ("Tab", "focus"),
    ("Enter", "select"),
    ("/", "search"),
    ("x", "x-axis"),
    ("c/u", "clear/restore"),
    ("F1", "help"),
];

const HELP_LINES: [(&str, &str); 12] = [
    ("j / PageDown", "Scroll to the next step"),
    ("k / PageUp", "Scroll back to the previous step"),
    ("Left / Right", "Move the year slider"),
    ("Tab", "Switch focus between map and scatterplot"),
    ("Up / Down", "Move the cursor in the focused panel"),
    ("Enter", "Click the country under the cursor"),
    ("/", "Search for a country"),
    ("x", "Cycle the scatterplot x-axis"),
    ("c", "Clear selection and min/max markers"),
    ("u", "Restore min/max markers"),
    ("F1 / Esc", "Close this help"),
    ("q", "Quit"),
];

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let [header, body, status, shortcuts] = Layout::vertical([
        Constraint::Length(4), // Step title and year slider
        Constraint::Min(10),   // Panels
        Constraint::Length(3), // Status area
        Constraint::Length(1), // Shortcuts hint
    ])
    .areas(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, header);
    render_panels(app, f, body);
    render_status(app, f, status);
    render_shortcuts(f, shortcuts);

    if app.show_help {
        render_help_popup(f);
    } else if app.search_input.is_some() {
        render_search_popup(app, f);
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let step = app.dashboard.step();
    let mut title = vec![
        Span::styled(
            "World Happiness ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("Step {}/{}: ", step.current_step() + 1, LAST_STEP + 1)),
        Span::styled(
            step.current_metric().label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if step.is_cleared() {
        title.push(Span::styled("  [cleared]", Style::default().fg(Color::Yellow)));
    }

    let slider: Vec<Span<'_>> = (YEAR_MIN..=YEAR_MAX)
        .map(|year| {
            if year == step.year() {
                Span::styled(
                    format!(" {year} "),
                    Style::default()
                        .bg(Color::Cyan)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {:02} ", year % 100), Style::default().fg(Color::Gray))
            }
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(vec![TextLine::from(title), TextLine::from(slider)]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

fn render_panels(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    let [top_right, bottom_right] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(right);
    let [radar, glyph] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(top_right);

    render_map_panel(app, f, left);
    render_radar_panel(app, f, radar);
    render_glyph_panel(app, f, glyph);
    render_scatter_panel(app, f, bottom_right);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selection = app.dashboard.selection();
    let selected = if selection.is_empty() {
        "none".to_string()
    } else {
        selection.into_iter().collect::<Vec<_>>().join(", ")
    };

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Focus: ", Style::default().fg(Color::Gray)),
            Span::raw(app.focus.label()),
            Span::styled("   Selected: ", Style::default().fg(Color::Gray)),
            Span::raw(selected),
        ]),
        TextLine::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let spans: Vec<Span<'_>> = SHORTCUTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::raw(format!(": {action}  ")),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_help_popup(f: &mut Frame<'_>) {
    let inner = render_popup_frame(f, "Help", 60, 60);
    let lines: Vec<TextLine<'_>> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{key:<14}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner.inner(Margin::new(1, 1)));
}

fn render_search_popup(app: &App, f: &mut Frame<'_>) {
    let inner = render_popup_frame(f, "Search country", 50, 40);
    let query = app.search_input.as_deref().unwrap_or_default();

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(query),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        TextLine::from(""),
    ];

    let suggestions = app.suggestions();
    if suggestions.is_empty() && !query.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No matching country",
            Style::default().fg(Color::Gray),
        )));
    }
    for (index, name) in suggestions.into_iter().enumerate() {
        let style = if index == app.suggestion_index {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(TextLine::from(Span::styled(name, style)));
    }

    f.render_widget(Paragraph::new(lines), inner.inner(Margin::new(1, 0)));
}
