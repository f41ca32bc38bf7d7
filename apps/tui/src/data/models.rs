use crate::domain::Metric;
use serde::Serialize;

/// Per-row highlight for the metric of the active choropleth step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    pub is_min: bool,
    pub is_max: bool,
}

impl StepMarker {
    pub const fn is_marked(self) -> bool {
        self.is_min || self.is_max
    }
}

/// One country-year observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub country: String,
    pub year: i32,
    /// Indexed by [`Metric::index`]. `None` is missing data, distinct from zero.
    pub metrics: [Option<f64>; Metric::COUNT],
    pub display: bool,
    pub marker: StepMarker,
}

impl Row {
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            metrics: [None; Metric::COUNT],
            display: false,
            marker: StepMarker::default(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        self.metrics[metric.index()] = Some(value);
        self
    }

    pub const fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics[metric.index()]
    }

    pub fn set_metric(&mut self, metric: Metric, value: Option<f64>) {
        self.metrics[metric.index()] = value;
    }

    pub fn key(&self) -> RowKey {
        RowKey {
            country: self.country.clone(),
            year: self.year,
        }
    }
}

/// Identity of a row: unique per (country, year).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowKey {
    pub country: String,
    pub year: i32,
}

/// Closed value range of a metric over one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of the non-null values, or `None` when there are none.
    pub fn of(values: impl IntoIterator<Item = Option<f64>>) -> Option<Self> {
        values.into_iter().flatten().fold(None, |acc, value| {
            Some(match acc {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }

    /// Position of `value` inside the extent, 0.0 when the extent is a single point.
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= f64::EPSILON {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Legend stops, rounded to one decimal.
    pub fn legend_stops(self) -> (f64, f64) {
        ((self.min * 10.0).round() / 10.0, (self.max * 10.0).round() / 10.0)
    }
}
