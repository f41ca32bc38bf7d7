//! Scroll-driven walk of the choropleth through the nine metric views.

use crate::bus::{DashboardEvent, EventBus};
use crate::context::DashboardState;
use crate::data::{DataStore, Extent, RowKey};
use crate::domain::Metric;
use serde::Serialize;

pub const LAST_STEP: usize = Metric::COUNT - 1;

/// Clamps any requested index into `0..=LAST_STEP`.
pub fn clamp_step(index: i64) -> usize {
    usize::try_from(index.max(0)).map_or(LAST_STEP, |index| index.min(LAST_STEP))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Step to enter when the waypoint of step `index` is crossed.
pub const fn step_for_waypoint(index: usize, direction: ScrollDirection) -> usize {
    match direction {
        ScrollDirection::Down => index,
        ScrollDirection::Up => index.saturating_sub(1),
    }
}

/// Render-ready state of the map for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepFrame {
    pub step: usize,
    pub metric: Metric,
    pub year: i32,
    /// Color-scale domain. `None` when the metric has no data for the year.
    pub extent: Option<Extent>,
    pub cleared: bool,
}

impl StepFrame {
    pub const fn title(&self) -> &'static str {
        self.metric.label()
    }

    pub fn legend_stops(&self) -> Option<(f64, f64)> {
        self.extent.map(Extent::legend_stops)
    }
}

/// Outcome of entering a step, before anything is published.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTransition {
    pub frame: StepFrame,
    pub marked: Vec<RowKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: Metric,
    year: i32,
    cleared: bool,
}

impl StepController {
    pub const fn new(year: i32) -> Self {
        Self {
            current: Metric::LifeLadder,
            year,
            cleared: false,
        }
    }

    pub const fn current_step(&self) -> usize {
        self.current.index()
    }

    pub const fn current_metric(&self) -> Metric {
        self.current
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub(crate) fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub(crate) fn set_cleared(&mut self, cleared: bool) {
        self.cleared = cleared;
    }

    /// Enters step `index` (clamped) and recomputes min/max markers for the current year.
    /// While cleared, the current year is left without markers.
    pub fn enter(&mut self, store: &mut DataStore, index: i64) -> StepTransition {
        let step = clamp_step(index);
        let metric = Metric::from_index(step).unwrap_or(Metric::LifeLadder);
        self.current = metric;

        let extent = store.extent(metric, self.year);
        if self.cleared {
            store.mark_extremes(metric, self.year, None);
        } else {
            store.mark_extremes(metric, self.year, extent);
        }
        let marked = store.marked_rows(self.year);

        tracing::info!(
            step,
            metric = metric.as_str(),
            year = self.year,
            cleared = self.cleared,
            marked = marked.len(),
            "entered step"
        );

        StepTransition {
            frame: StepFrame {
                step,
                metric,
                year: self.year,
                extent,
                cleared: self.cleared,
            },
            marked,
        }
    }
}

/// Enters a step and broadcasts the static min/max selection, then the map frame.
pub fn go_to_step(state: &mut DashboardState, bus: &EventBus<DashboardState>, index: i64) {
    let StepTransition { frame, marked } = state.step.enter(&mut state.store, index);
    bus.publish(
        state,
        &DashboardEvent::StepMinMaxComputed {
            metric: frame.metric,
            rows: marked,
        },
    );
    bus.publish(state, &DashboardEvent::StepRendered(frame));
}

/// Re-enters the current step, e.g. after a year change or a clear.
pub fn refresh_step(state: &mut DashboardState, bus: &EventBus<DashboardState>) {
    let current = i64::try_from(state.step.current_step()).unwrap_or_default();
    go_to_step(state, bus, current);
}
