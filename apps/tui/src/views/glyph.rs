use crate::data::DataStore;
use crate::domain::Metric;
use crate::views::ChartView;

pub const FACES_PER_COUNTRY: usize = 5;

/// Life Ladder points represented by one full face.
const LADDER_PER_FACE: f64 = 2.0;

/// Fill of each face, 0.0 (empty) to 1.0 (full). A missing score leaves every face empty.
pub fn face_fills(life_ladder: Option<f64>) -> [f64; FACES_PER_COUNTRY] {
    let ladder = life_ladder.unwrap_or(0.0);
    std::array::from_fn(|face| {
        let floor = face as f64 * LADDER_PER_FACE;
        ((ladder - floor) / LADDER_PER_FACE).clamp(0.0, 1.0)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRow {
    pub country: String,
    pub life_ladder: Option<f64>,
    pub fills: [f64; FACES_PER_COUNTRY],
}

/// Pictograph of each selected country's Life Ladder score.
#[derive(Debug, Clone, Default)]
pub struct GlyphView {
    rows: Vec<GlyphRow>,
    revision: u64,
}

impl GlyphView {
    pub fn rows(&self) -> &[GlyphRow] {
        &self.rows
    }
}

impl ChartView for GlyphView {
    fn name(&self) -> &'static str {
        "glyph"
    }

    fn refresh(&mut self, store: &DataStore, year: i32) {
        self.rows = store
            .displayed_rows(year)
            .map(|row| {
                let life_ladder = row.metric(Metric::LifeLadder);
                GlyphRow {
                    country: row.country.clone(),
                    life_ladder,
                    fills: face_fills(life_ladder),
                }
            })
            .collect();
        self.revision += 1;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
