//! Chart view models.
//!
//! Each view turns the store's current-year rows into the shapes a renderer
//! draws. Views only ever see `&DataStore`; the only way they affect the
//! dashboard is by returning gesture payloads that the caller publishes.

pub mod glyph;
pub mod map;
pub mod radar;
pub mod scatter;

pub use glyph::{GlyphRow, GlyphView, FACES_PER_COUNTRY};
pub use map::{Fill, MapRegion, MapView};
pub use radar::{RadarSeries, RadarView, RADAR_AXES, RADAR_LEVELS};
pub use scatter::{ScatterPoint, ScatterView, SCATTER_METRICS};

use crate::data::DataStore;

pub trait ChartView {
    fn name(&self) -> &'static str;

    /// Rebuilds the view from the rows of `year`.
    fn refresh(&mut self, store: &DataStore, year: i32);

    /// Number of refreshes so far.
    fn revision(&self) -> u64;
}

#[derive(Debug, Clone, Default)]
pub struct ChartViews {
    pub map: MapView,
    pub radar: RadarView,
    pub scatter: ScatterView,
    pub glyph: GlyphView,
}

impl ChartViews {
    pub fn refresh_all(&mut self, store: &DataStore, year: i32) {
        for view in self.iter_mut() {
            view.refresh(store, year);
            tracing::trace!(
                view = view.name(),
                revision = view.revision(),
                year,
                "view refreshed"
            );
        }
    }

    pub fn iter_mut(&mut self) -> [&mut dyn ChartView; 4] {
        [
            &mut self.map,
            &mut self.radar,
            &mut self.scatter,
            &mut self.glyph,
        ]
    }
}
