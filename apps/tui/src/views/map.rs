use crate::data::{DataStore, Extent, Row};
use crate::domain::Metric;
use crate::step::StepFrame;
use crate::views::ChartView;

/// How a country is shaded on the choropleth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    MaxMarker,
    MinMarker,
    Selected,
    NoData,
    /// Position on the color scale, 0.0 (light) to 1.0 (dark).
    Scale(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub country: String,
    pub value: Option<f64>,
    pub fill: Fill,
    pub tooltip: String,
}

#[derive(Debug, Clone, Default)]
pub struct MapView {
    frame: Option<StepFrame>,
    regions: Vec<MapRegion>,
    revision: u64,
}

impl MapView {
    /// Takes the metric and color domain announced for the step being shown.
    pub fn apply_frame(&mut self, frame: StepFrame) {
        self.frame = Some(frame);
    }

    pub fn metric(&self) -> Metric {
        self.frame
            .as_ref()
            .map_or(Metric::LifeLadder, |frame| frame.metric)
    }

    pub fn regions(&self) -> &[MapRegion] {
        &self.regions
    }

    pub fn region(&self, country: &str) -> Option<&MapRegion> {
        self.regions.iter().find(|region| region.country == country)
    }

    pub fn legend_title(&self) -> &'static str {
        self.metric().label()
    }

    pub fn legend_stops(&self) -> Option<(f64, f64)> {
        self.frame.as_ref().and_then(StepFrame::legend_stops)
    }
}

fn fill_for(row: &Row, value: Option<f64>, extent: Option<Extent>) -> Fill {
    if row.marker.is_max {
        return Fill::MaxMarker;
    }
    if row.marker.is_min {
        return Fill::MinMarker;
    }
    if row.display {
        return Fill::Selected;
    }
    match (value, extent) {
        (Some(value), Some(extent)) => Fill::Scale(extent.normalize(value)),
        _ => Fill::NoData,
    }
}

pub fn tooltip(metric: Metric, value: Option<f64>) -> String {
    value.map_or_else(
        || format!("{}: N/A", metric.label()),
        |value| format!("{}: {value}", metric.label()),
    )
}

impl ChartView for MapView {
    fn name(&self) -> &'static str {
        "map"
    }

    fn refresh(&mut self, store: &DataStore, year: i32) {
        let metric = self.metric();
        let extent = self
            .frame
            .as_ref()
            .filter(|frame| frame.year == year)
            .map_or_else(|| store.extent(metric, year), |frame| frame.extent);

        self.regions = store
            .rows_for_year(year)
            .map(|row| {
                let value = row.metric(metric);
                MapRegion {
                    country: row.country.clone(),
                    value,
                    fill: fill_for(row, value, extent),
                    tooltip: tooltip(metric, value),
                }
            })
            .collect();
        self.revision += 1;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
