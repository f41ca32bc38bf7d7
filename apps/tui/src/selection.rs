//! Cross-chart selection, reconciled through the per-row `display` flag.
//!
//! The selected set is never stored on its own: it is read back from the
//! current year's rows every time, so no view can hold a divergent copy.

use crate::bus::{DashboardEvent, EventBus, EventName};
use crate::context::DashboardState;
use crate::data::DataStore;
use std::collections::BTreeSet;

/// Most countries the map keeps selected through clicks.
pub const MAP_SELECTION_LIMIT: usize = 6;

/// Read-only view of the selection for one year.
#[derive(Debug, Clone, Copy)]
pub struct SelectionState<'a> {
    store: &'a DataStore,
    year: i32,
}

impl<'a> SelectionState<'a> {
    pub const fn new(store: &'a DataStore, year: i32) -> Self {
        Self { store, year }
    }

    pub fn countries(&self) -> BTreeSet<String> {
        self.store
            .displayed_rows(self.year)
            .map(|row| row.country.clone())
            .collect()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.store
            .displayed_rows(self.year)
            .any(|row| row.country == country)
    }

    pub fn len(&self) -> usize {
        self.store.displayed_rows(self.year).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Payload for a map click on `country`, or `None` when the click is ignored
/// because the selection is already full.
pub fn toggle_map_selection(selection: &SelectionState<'_>, country: &str) -> Option<Vec<String>> {
    let mut countries = selection.countries();
    if !countries.remove(country) {
        if countries.len() >= MAP_SELECTION_LIMIT {
            return None;
        }
        countries.insert(country.to_string());
    }
    Some(countries.into_iter().collect())
}

/// Payload for a scatter click: the displayed set with `country` flipped.
pub fn toggle_scatter_selection(selection: &SelectionState<'_>, country: &str) -> Vec<String> {
    let mut countries = selection.countries();
    if !countries.remove(country) {
        countries.insert(country.to_string());
    }
    countries.into_iter().collect()
}

/// The set an event replaces the selection with, if it is a replace event.
pub fn replacement(event: &DashboardEvent) -> Option<BTreeSet<String>> {
    match event {
        DashboardEvent::MapCountriesSelected(countries)
        | DashboardEvent::ScatterCountrySelected(countries) => {
            Some(countries.iter().cloned().collect())
        }
        DashboardEvent::CountrySearched(country) => Some(BTreeSet::from([country.clone()])),
        DashboardEvent::StepMinMaxComputed { rows, .. } => {
            Some(rows.iter().map(|key| key.country.clone()).collect())
        }
        DashboardEvent::YearChanged { .. }
        | DashboardEvent::SelectionChanged
        | DashboardEvent::StepRendered(_) => None,
    }
}

/// Updates `display` for the current year and announces the change in one step.
pub fn replace(
    state: &mut DashboardState,
    bus: &EventBus<DashboardState>,
    countries: &BTreeSet<String>,
) {
    let year = state.step.year();
    state.store.set_display(countries, year);
    tracing::debug!(year, selected = countries.len(), "selection replaced");
    bus.publish(state, &DashboardEvent::SelectionChanged);
}

fn on_replace_event(
    state: &mut DashboardState,
    event: &DashboardEvent,
    bus: &EventBus<DashboardState>,
) {
    if let Some(countries) = replacement(event) {
        replace(state, bus, &countries);
    }
}

pub fn register(bus: &EventBus<DashboardState>) {
    for name in [
        EventName::MapCountriesSelected,
        EventName::ScatterCountrySelected,
        EventName::CountrySearched,
        EventName::StepMinMaxComputed,
    ] {
        bus.register(name, on_replace_event);
    }
}
