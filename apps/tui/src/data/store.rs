use crate::data::models::{Extent, Row, RowKey, StepMarker};
use crate::domain::Metric;
use crate::error::LoadError;
use std::collections::{BTreeSet, HashSet};

/// The single owned, mutable table behind every view.
#[derive(Debug, Clone)]
pub struct DataStore {
    rows: Vec<Row>,
}

impl DataStore {
    /// Takes ownership of the loaded rows. Fails on an empty table or a repeated (country, year).
    pub fn load(rows: Vec<Row>) -> Result<Self, LoadError> {
        if rows.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert((row.country.as_str(), row.year)) {
                return Err(LoadError::DuplicateRow {
                    country: row.country.clone(),
                    year: row.year,
                });
            }
        }

        tracing::info!(rows = rows.len(), "dataset loaded");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows_for_year(&self, year: i32) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(move |row| row.year == year)
    }

    pub fn displayed_rows(&self, year: i32) -> impl Iterator<Item = &Row> + '_ {
        self.rows_for_year(year).filter(|row| row.display)
    }

    pub fn row(&self, country: &str, year: i32) -> Option<&Row> {
        self.rows
            .iter()
            .find(|row| row.year == year && row.country == country)
    }

    /// Displays exactly the given countries for `year`; other years keep their flags.
    pub fn set_display(&mut self, countries: &BTreeSet<String>, year: i32) {
        for row in self.rows.iter_mut().filter(|row| row.year == year) {
            row.display = countries.contains(&row.country);
        }
    }

    /// Resets display and min/max markers on every row regardless of year.
    pub fn clear_all(&mut self) {
        for row in &mut self.rows {
            row.display = false;
            row.marker = StepMarker::default();
        }
    }

    pub fn extent(&self, metric: Metric, year: i32) -> Option<Extent> {
        Extent::of(self.rows_for_year(year).map(|row| row.metric(metric)))
    }

    /// Marks every row of `year` whose value equals an extreme. Ties mark several rows.
    /// Rows with a null value, and all rows when `extent` is `None`, end up unmarked.
    pub fn mark_extremes(&mut self, metric: Metric, year: i32, extent: Option<Extent>) {
        for row in self.rows.iter_mut().filter(|row| row.year == year) {
            row.marker = match (row.metric(metric), extent) {
                #[allow(clippy::float_cmp)]
                (Some(value), Some(extent)) => StepMarker {
                    is_min: value == extent.min,
                    is_max: value == extent.max,
                },
                _ => StepMarker::default(),
            };
        }
    }

    pub fn marked_rows(&self, year: i32) -> Vec<RowKey> {
        self.rows_for_year(year)
            .filter(|row| row.marker.is_marked())
            .map(Row::key)
            .collect()
    }

    /// Unique country names, sorted.
    pub fn countries(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn years(&self) -> BTreeSet<i32> {
        self.rows.iter().map(|row| row.year).collect()
    }
}
