use crate::data::{DataStore, Extent};
use crate::domain::Metric;
use crate::views::ChartView;

/// Attributes offered by the scatterplot's x-axis filter, in menu order.
pub const SCATTER_METRICS: [Metric; 8] = [
    Metric::Gdp,
    Metric::SocialSupport,
    Metric::HealthyLife,
    Metric::Freedom,
    Metric::Generosity,
    Metric::Perceptions,
    Metric::PositiveAffect,
    Metric::NegativeAffect,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub selected: bool,
}

/// Life Ladder (y) against a selectable metric (x).
#[derive(Debug, Clone)]
pub struct ScatterView {
    x_metric: Metric,
    points: Vec<ScatterPoint>,
    x_domain: Option<Extent>,
    y_domain: Option<Extent>,
    revision: u64,
}

impl Default for ScatterView {
    fn default() -> Self {
        Self {
            x_metric: Metric::SocialSupport,
            points: Vec::new(),
            x_domain: None,
            y_domain: None,
            revision: 0,
        }
    }
}

impl ScatterView {
    pub const Y_METRIC: Metric = Metric::LifeLadder;

    pub const fn x_metric(&self) -> Metric {
        self.x_metric
    }

    /// Returns false, leaving the axis unchanged, for metrics the filter does not offer.
    pub fn set_x_metric(&mut self, metric: Metric) -> bool {
        if SCATTER_METRICS.contains(&metric) {
            self.x_metric = metric;
            true
        } else {
            false
        }
    }

    pub fn cycle_x_metric(&mut self) -> Metric {
        let position = SCATTER_METRICS
            .iter()
            .position(|metric| *metric == self.x_metric)
            .unwrap_or_default();
        self.x_metric = SCATTER_METRICS[(position + 1) % SCATTER_METRICS.len()];
        self.x_metric
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn point(&self, country: &str) -> Option<&ScatterPoint> {
        self.points.iter().find(|point| point.country == country)
    }

    pub const fn x_domain(&self) -> Option<Extent> {
        self.x_domain
    }

    pub const fn y_domain(&self) -> Option<Extent> {
        self.y_domain
    }
}

/// Axis domain anchored at zero unless the data goes negative.
fn axis_domain(values: impl Iterator<Item = f64>) -> Option<Extent> {
    Extent::of(values.map(Some)).map(|extent| Extent {
        min: extent.min.min(0.0),
        max: extent.max,
    })
}

impl ChartView for ScatterView {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn refresh(&mut self, store: &DataStore, year: i32) {
        let x_metric = self.x_metric;
        self.points = store
            .rows_for_year(year)
            .filter_map(|row| {
                Some(ScatterPoint {
                    country: row.country.clone(),
                    x: row.metric(x_metric)?,
                    y: row.metric(Self::Y_METRIC)?,
                    selected: row.display,
                })
            })
            .collect();
        self.x_domain = axis_domain(self.points.iter().map(|point| point.x));
        self.y_domain = axis_domain(self.points.iter().map(|point| point.y));
        self.revision += 1;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
