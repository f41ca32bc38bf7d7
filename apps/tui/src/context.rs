//! The dashboard object: one store, one step controller, one bus.
//!
//! Everything the charts share lives in [`DashboardState`], which the bus
//! hands to every handler. Gestures coming from a front end go through
//! [`Dashboard`], which turns them into events.

use crate::bus::{DashboardEvent, EventBus, EventName};
use crate::data::{DataStore, Extent};
use crate::domain::Metric;
use crate::search::CountryIndex;
use crate::selection::{self, SelectionState};
use crate::step::{self, ScrollDirection, StepController};
use crate::views::{ChartView, ChartViews};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: DataStore,
    pub step: StepController,
    pub views: ChartViews,
}

impl DashboardState {
    pub fn selection(&self) -> SelectionState<'_> {
        SelectionState::new(&self.store, self.step.year())
    }
}

/// Extremes of the active step, for reports and headless output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummary {
    pub step: usize,
    pub metric: Metric,
    pub title: &'static str,
    pub year: i32,
    pub extent: Option<Extent>,
    pub cleared: bool,
    pub min: Vec<String>,
    pub max: Vec<String>,
}

#[derive(Debug)]
pub struct Dashboard {
    state: DashboardState,
    bus: EventBus<DashboardState>,
    index: CountryIndex,
}

impl Dashboard {
    /// Wires the handlers and enters the first step for `year`.
    pub fn new(store: DataStore, year: i32) -> Self {
        let index = CountryIndex::new(store.countries());
        let bus = EventBus::new();
        selection::register(&bus);
        bus.register(EventName::YearChanged, on_year_changed);
        bus.register(EventName::SelectionChanged, on_selection_changed);
        bus.register(EventName::StepRendered, on_step_rendered);

        let mut dashboard = Self {
            state: DashboardState {
                store,
                step: StepController::new(year),
                views: ChartViews::default(),
            },
            bus,
            index,
        };
        tracing::info!(
            rows = dashboard.state.store.len(),
            countries = dashboard.index.names().len(),
            year,
            "dashboard ready"
        );
        dashboard.go_to_step(0);
        dashboard
    }

    pub const fn store(&self) -> &DataStore {
        &self.state.store
    }

    pub const fn views(&self) -> &ChartViews {
        &self.state.views
    }

    pub const fn step(&self) -> &StepController {
        &self.state.step
    }

    /// Adds a handler after the built-in ones.
    pub fn register<F>(&self, name: EventName, handler: F)
    where
        F: Fn(&mut DashboardState, &DashboardEvent, &EventBus<DashboardState>) + 'static,
    {
        self.bus.register(name, handler);
    }

    pub fn publish(&mut self, event: &DashboardEvent) {
        self.bus.publish(&mut self.state, event);
    }

    /// Out-of-range indices are clamped.
    pub fn go_to_step(&mut self, index: i64) {
        step::go_to_step(&mut self.state, &self.bus, index);
    }

    /// Crossing the waypoint of step `waypoint` while scrolling.
    pub fn scroll(&mut self, waypoint: usize, direction: ScrollDirection) {
        let target = step::step_for_waypoint(waypoint, direction);
        self.go_to_step(i64::try_from(target).unwrap_or(i64::MAX));
    }

    pub fn set_year(&mut self, year: i32) {
        self.publish(&DashboardEvent::YearChanged { year });
    }

    /// Returns false when the click was ignored because the selection is full.
    pub fn click_map_country(&mut self, country: &str) -> bool {
        let Some(countries) = selection::toggle_map_selection(&self.state.selection(), country)
        else {
            tracing::debug!(country, "map selection full, click ignored");
            return false;
        };
        self.publish(&DashboardEvent::MapCountriesSelected(countries));
        true
    }

    /// Flips `country` in or out of the displayed set.
    pub fn click_scatter_country(&mut self, country: &str) {
        let countries = selection::toggle_scatter_selection(&self.state.selection(), country);
        self.publish(&DashboardEvent::ScatterCountrySelected(countries));
    }

    /// Selects the country best matching `query`. Nothing is published when nothing matches.
    pub fn search(&mut self, query: &str) -> Option<String> {
        let Some(country) = self.index.resolve(query).map(str::to_string) else {
            tracing::debug!(query, "search matched nothing");
            return None;
        };
        self.publish(&DashboardEvent::CountrySearched(country.clone()));
        Some(country)
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        self.index.suggest(query, limit)
    }

    /// Drops every selection and marker and keeps markers off until [`Self::unclear`].
    pub fn clear(&mut self) {
        self.state.store.clear_all();
        self.state.step.set_cleared(true);
        tracing::info!("markers cleared");
        step::refresh_step(&mut self.state, &self.bus);
    }

    pub fn unclear(&mut self) {
        self.state.step.set_cleared(false);
        tracing::info!("markers restored");
        step::refresh_step(&mut self.state, &self.bus);
    }

    /// Returns false for metrics the scatterplot does not offer on its x-axis.
    pub fn set_scatter_metric(&mut self, metric: Metric) -> bool {
        if !self.state.views.scatter.set_x_metric(metric) {
            return false;
        }
        self.refresh_scatter();
        true
    }

    pub fn cycle_scatter_metric(&mut self) -> Metric {
        let metric = self.state.views.scatter.cycle_x_metric();
        self.refresh_scatter();
        metric
    }

    fn refresh_scatter(&mut self) {
        let year = self.state.step.year();
        self.state.views.scatter.refresh(&self.state.store, year);
    }

    /// Countries displayed in the current year.
    pub fn selection(&self) -> BTreeSet<String> {
        self.state.selection().countries()
    }

    pub fn summary(&self) -> StepSummary {
        let year = self.state.step.year();
        let metric = self.state.step.current_metric();
        let mut min = Vec::new();
        let mut max = Vec::new();
        for row in self.state.store.rows_for_year(year) {
            if row.marker.is_min {
                min.push(row.country.clone());
            }
            if row.marker.is_max {
                max.push(row.country.clone());
            }
        }
        StepSummary {
            step: self.state.step.current_step(),
            metric,
            title: metric.label(),
            year,
            extent: self.state.store.extent(metric, year),
            cleared: self.state.step.is_cleared(),
            min,
            max,
        }
    }
}

fn on_year_changed(
    state: &mut DashboardState,
    event: &DashboardEvent,
    bus: &EventBus<DashboardState>,
) {
    if let DashboardEvent::YearChanged { year } = event {
        tracing::info!(year, "year changed");
        state.step.set_year(*year);
        step::refresh_step(state, bus);
    }
}

fn on_selection_changed(
    state: &mut DashboardState,
    _event: &DashboardEvent,
    _bus: &EventBus<DashboardState>,
) {
    let year = state.step.year();
    state.views.refresh_all(&state.store, year);
}

fn on_step_rendered(
    state: &mut DashboardState,
    event: &DashboardEvent,
    _bus: &EventBus<DashboardState>,
) {
    if let DashboardEvent::StepRendered(frame) = event {
        state.views.map.apply_frame(frame.clone());
        let year = state.step.year();
        state.views.map.refresh(&state.store, year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::error::LoadError;
    use crate::views::Fill;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dashboard() -> Result<Dashboard, LoadError> {
        let store = DataStore::load(vec![
            Row::new("Finland", 2013)
                .with_metric(Metric::LifeLadder, 7.8)
                .with_metric(Metric::SocialSupport, 0.94)
                .with_metric(Metric::Gdp, 10.7),
            Row::new("Chad", 2013)
                .with_metric(Metric::LifeLadder, 3.2)
                .with_metric(Metric::SocialSupport, 0.58)
                .with_metric(Metric::Gdp, 7.4),
            Row::new("Norway", 2013)
                .with_metric(Metric::LifeLadder, 7.8)
                .with_metric(Metric::SocialSupport, 0.95),
            Row::new("Finland", 2014).with_metric(Metric::LifeLadder, 7.4),
            Row::new("Chad", 2014).with_metric(Metric::LifeLadder, 3.4),
        ])?;
        Ok(Dashboard::new(store, 2013))
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn displayed(dashboard: &Dashboard, year: i32) -> BTreeSet<String> {
        dashboard
            .store()
            .displayed_rows(year)
            .map(|row| row.country.clone())
            .collect()
    }

    #[test]
    fn first_step_marks_tied_maxima() -> Result<(), LoadError> {
        let dashboard = dashboard()?;

        let summary = dashboard.summary();
        assert_eq!(summary.step, 0);
        assert_eq!(summary.title, "Life Ladder");
        assert_eq!(summary.max, ["Finland", "Norway"]);
        assert_eq!(summary.min, ["Chad"]);
        assert_eq!(dashboard.selection(), set(&["Chad", "Finland", "Norway"]));
        assert!(dashboard
            .store()
            .rows_for_year(2014)
            .all(|row| !row.marker.is_marked() && !row.display));
        Ok(())
    }

    #[test]
    fn every_step_marks_exactly_the_extremes() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;
        for index in 0..Metric::COUNT {
            dashboard.go_to_step(i64::try_from(index).unwrap_or_default());
            let metric = dashboard.step().current_metric();
            let extent = dashboard.store().extent(metric, 2013);
            for row in dashboard.store().rows_for_year(2013) {
                let value = row.metric(metric);
                assert_eq!(
                    row.marker.is_max,
                    value.is_some() && value == extent.map(|extent| extent.max)
                );
                assert_eq!(
                    row.marker.is_min,
                    value.is_some() && value == extent.map(|extent| extent.min)
                );
            }
        }
        Ok(())
    }

    #[test]
    fn map_selection_round_trip() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        dashboard.publish(&DashboardEvent::MapCountriesSelected(Vec::new()));
        assert!(dashboard.selection().is_empty());
        dashboard.publish(&DashboardEvent::MapCountriesSelected(vec!["Finland".into()]));

        assert_eq!(displayed(&dashboard, 2013), set(&["Finland"]));
        assert_eq!(dashboard.views().glyph.rows().len(), 1);
        assert_eq!(dashboard.views().radar.series().len(), 1);
        Ok(())
    }

    #[test]
    fn map_clicks_toggle_membership() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;
        dashboard.publish(&DashboardEvent::MapCountriesSelected(Vec::new()));

        assert!(dashboard.click_map_country("Chad"));
        assert!(dashboard.click_map_country("Norway"));
        assert_eq!(dashboard.selection(), set(&["Chad", "Norway"]));
        assert!(dashboard.click_map_country("Chad"));
        assert_eq!(dashboard.selection(), set(&["Norway"]));
        assert_eq!(
            dashboard.views().map.region("Norway").map(|region| region.fill),
            Some(Fill::MaxMarker)
        );
        Ok(())
    }

    #[test]
    fn scatter_clicks_add_and_remove_points() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;
        dashboard.publish(&DashboardEvent::ScatterCountrySelected(Vec::new()));

        dashboard.click_scatter_country("Chad");
        dashboard.click_scatter_country("Finland");
        assert_eq!(dashboard.selection(), set(&["Chad", "Finland"]));
        assert!(dashboard
            .views()
            .scatter
            .point("Chad")
            .is_some_and(|point| point.selected));

        dashboard.click_scatter_country("Chad");
        assert_eq!(dashboard.selection(), set(&["Finland"]));
        assert!(dashboard
            .views()
            .scatter
            .point("Chad")
            .is_some_and(|point| !point.selected));
        Ok(())
    }

    #[test]
    fn search_selects_the_best_match() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        assert_eq!(dashboard.search("norw"), Some("Norway".to_string()));
        assert_eq!(dashboard.selection(), set(&["Norway"]));

        assert_eq!(dashboard.search("qqqq"), None);
        assert_eq!(dashboard.selection(), set(&["Norway"]));
        assert_eq!(dashboard.suggest("fin", 3), ["Finland"]);
        Ok(())
    }

    #[test]
    fn clear_suppresses_markers_until_unclear() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        dashboard.clear();
        assert!(dashboard.step().is_cleared());
        for index in [0, 2, 5, 8] {
            dashboard.go_to_step(index);
            assert!(dashboard.store().marked_rows(2013).is_empty());
        }
        assert!(dashboard.selection().is_empty());
        assert_eq!(dashboard.views().map.legend_title(), "Generosity");

        dashboard.unclear();
        assert_eq!(dashboard.store().marked_rows(2013).len(), 0);
        dashboard.go_to_step(0);
        assert_eq!(dashboard.store().marked_rows(2013).len(), 3);
        Ok(())
    }

    #[test]
    fn year_change_recomputes_the_current_step() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        dashboard.set_year(2014);

        assert_eq!(dashboard.step().year(), 2014);
        let summary = dashboard.summary();
        assert_eq!(summary.max, ["Finland"]);
        assert_eq!(summary.min, ["Chad"]);
        assert_eq!(dashboard.views().map.regions().len(), 2);
        assert!(dashboard
            .store()
            .row("Norway", 2013)
            .is_some_and(|row| row.marker.is_max));
        Ok(())
    }

    #[test]
    fn empty_year_empties_every_view() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        dashboard.set_year(2020);

        let views = dashboard.views();
        assert!(views.map.regions().is_empty());
        assert!(views.radar.series().is_empty());
        assert!(views.scatter.points().is_empty());
        assert!(views.glyph.rows().is_empty());
        assert!(dashboard.selection().is_empty());
        assert_eq!(dashboard.summary().extent, None);
        Ok(())
    }

    #[test]
    fn scrolling_up_enters_the_previous_step() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;

        dashboard.scroll(4, ScrollDirection::Down);
        assert_eq!(dashboard.step().current_step(), 4);
        dashboard.scroll(4, ScrollDirection::Up);
        assert_eq!(dashboard.step().current_step(), 3);
        Ok(())
    }

    #[test]
    fn scatter_axis_switch_refreshes_points() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;
        assert_eq!(dashboard.views().scatter.points().len(), 3);

        assert!(dashboard.set_scatter_metric(Metric::Gdp));
        assert_eq!(dashboard.views().scatter.points().len(), 2);
        assert!(!dashboard.set_scatter_metric(Metric::LifeLadder));
        assert_eq!(dashboard.views().scatter.x_metric(), Metric::Gdp);
        Ok(())
    }

    #[test]
    fn step_events_arrive_in_order_with_selection_nested() -> Result<(), LoadError> {
        let mut dashboard = dashboard()?;
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        for name in [
            EventName::StepMinMaxComputed,
            EventName::SelectionChanged,
            EventName::StepRendered,
        ] {
            let seen = Rc::clone(&seen);
            dashboard.register(name, move |state, event, bus| {
                seen.borrow_mut().push(format!(
                    "{}@{} selected={}",
                    event.name(),
                    bus.depth(),
                    state.selection().len()
                ));
            });
        }

        dashboard.go_to_step(1);

        assert_eq!(
            *seen.borrow(),
            [
                "selectionChanged@2 selected=2",
                "stepMinMaxComputed@1 selected=2",
                "stepRendered@1 selected=2",
            ]
        );
        Ok(())
    }
}
