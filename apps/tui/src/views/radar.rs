use crate::data::DataStore;
use crate::domain::Metric;
use crate::views::ChartView;
use std::f64::consts::TAU;

/// Spokes of the spider chart, clockwise from the top.
pub const RADAR_AXES: [Metric; 5] = [
    Metric::SocialSupport,
    Metric::Freedom,
    Metric::Perceptions,
    Metric::PositiveAffect,
    Metric::NegativeAffect,
];

/// Concentric guide levels; the outermost is `RADAR_MAX_VALUE`.
pub const RADAR_LEVELS: usize = 5;
pub const RADAR_MAX_VALUE: f64 = 1.0;

/// Short spoke labels.
pub const fn axis_label(metric: Metric) -> &'static str {
    match metric {
        Metric::Freedom => "Freedom",
        other => other.column(),
    }
}

/// One displayed country's polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub country: String,
    pub life_ladder: Option<f64>,
    /// Aligned with [`RADAR_AXES`].
    pub values: [Option<f64>; RADAR_AXES.len()],
}

impl RadarSeries {
    /// Polygon corners in unit space, y pointing up. Missing and negative values sit at the center.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(axis, value)| {
                let radius = value.unwrap_or(0.0).max(0.0) / RADAR_MAX_VALUE;
                let (x, y) = spoke(axis);
                (x * radius, y * radius)
            })
            .collect()
    }
}

/// Unit vector of spoke `axis`.
pub fn spoke(axis: usize) -> (f64, f64) {
    let angle = axis as f64 * TAU / RADAR_AXES.len() as f64;
    (angle.sin(), angle.cos())
}

/// Value printed at guide level `level` (0-based).
pub fn level_value(level: usize) -> f64 {
    RADAR_MAX_VALUE * (level + 1) as f64 / RADAR_LEVELS as f64
}

#[derive(Debug, Clone, Default)]
pub struct RadarView {
    series: Vec<RadarSeries>,
    revision: u64,
}

impl RadarView {
    pub fn series(&self) -> &[RadarSeries] {
        &self.series
    }
}

impl ChartView for RadarView {
    fn name(&self) -> &'static str {
        "radar"
    }

    fn refresh(&mut self, store: &DataStore, year: i32) {
        self.series = store
            .displayed_rows(year)
            .map(|row| RadarSeries {
                country: row.country.clone(),
                life_ladder: row.metric(Metric::LifeLadder),
                values: RADAR_AXES.map(|metric| row.metric(metric)),
            })
            .collect();
        self.revision += 1;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::error::LoadError;
    use std::collections::BTreeSet;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn only_displayed_rows_become_series() -> Result<(), LoadError> {
        let mut store = DataStore::load(vec![
            Row::new("Chad", 2013).with_metric(Metric::Freedom, 0.5),
            Row::new("Peru", 2013)
                .with_metric(Metric::Freedom, 0.7)
                .with_metric(Metric::LifeLadder, 5.8),
            Row::new("Peru", 2014).with_metric(Metric::Freedom, 0.9),
        ])?;
        store.set_display(&BTreeSet::from(["Peru".to_string()]), 2013);
        store.set_display(&BTreeSet::from(["Peru".to_string()]), 2014);

        let mut radar = RadarView::default();
        radar.refresh(&store, 2013);

        assert_eq!(radar.series().len(), 1);
        let peru = &radar.series()[0];
        assert_eq!(peru.country, "Peru");
        assert_eq!(peru.life_ladder, Some(5.8));
        assert_eq!(peru.values, [None, Some(0.7), None, None, None]);
        Ok(())
    }

    #[test]
    fn vertices_scale_spokes_by_value() {
        let series = RadarSeries {
            country: "Peru".into(),
            life_ladder: None,
            values: [Some(1.0), None, Some(-0.3), Some(0.5), Some(0.25)],
        };
        let vertices = series.vertices();

        assert_close(vertices[0].0, 0.0);
        assert_close(vertices[0].1, 1.0);
        assert_eq!(vertices[1], (0.0, 0.0));
        assert_eq!(vertices[2], (0.0, 0.0));
        let (x, y) = spoke(3);
        assert_close(vertices[3].0, x * 0.5);
        assert_close(vertices[3].1, y * 0.5);
    }

    #[test]
    fn levels_divide_the_max_value() {
        assert_close(level_value(0), 0.2);
        assert_close(level_value(RADAR_LEVELS - 1), RADAR_MAX_VALUE);
    }
}
