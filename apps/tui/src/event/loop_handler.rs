use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use happiness_dashboard::step::LAST_STEP;
use happiness_dashboard::{Dashboard, StepSummary};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::terminal::DashboardTerminal;
use crate::ui;

/// Walks every step for the configured year and prints its extremes.
pub fn run_headless(dashboard: &mut Dashboard, json: bool) -> Result<()> {
    let report = build_headless_report(dashboard);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_text(&report));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct HeadlessReport {
    year: i32,
    rows: usize,
    countries: usize,
    steps: Vec<StepSummary>,
}

fn build_headless_report(dashboard: &mut Dashboard) -> HeadlessReport {
    let year = dashboard.step().year();
    let rows = dashboard.store().rows_for_year(year).count();
    let countries = dashboard.store().countries().len();

    let steps = (0..=LAST_STEP)
        .map(|step| {
            dashboard.go_to_step(i64::try_from(step).unwrap_or_default());
            dashboard.summary()
        })
        .collect();

    HeadlessReport {
        year,
        rows,
        countries,
        steps,
    }
}

fn render_headless_text(report: &HeadlessReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nWorld Happiness {}", report.year);
    let _ = writeln!(out, "====================");
    let _ = writeln!(
        out,
        "Rows this year: {} ({} countries overall)",
        report.rows, report.countries
    );

    for summary in &report.steps {
        let _ = writeln!(out, "\n{}. {}", summary.step + 1, summary.title);
        match summary.extent {
            Some(extent) => {
                let _ = writeln!(
                    out,
                    "- max {:.3}: {}",
                    extent.max,
                    summary.max.join(", ")
                );
                let _ = writeln!(
                    out,
                    "- min {:.3}: {}",
                    extent.min,
                    summary.min.join(", ")
                );
            }
            None => {
                let _ = writeln!(out, "- no data");
            }
        }
    }

    out
}

/// Draws and handles keys until the user quits.
pub fn run(terminal: &mut DashboardTerminal, app: &mut App) -> Result<()> {
    const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|f| ui::ui(app, f))?;

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
