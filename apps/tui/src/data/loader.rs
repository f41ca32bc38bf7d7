use crate::data::models::Row;
use crate::domain::Metric;
use crate::error::LoadError;
use std::io::Read;
use std::path::Path;

pub const COUNTRY_COLUMN: &str = "Country name";
pub const YEAR_COLUMN: &str = "year";

/// Column positions of the required headers.
struct Columns {
    country: usize,
    year: usize,
    metrics: [usize; Metric::COUNT],
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);

        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let found = position(name);
            if found.is_none() {
                missing.push(name.to_string());
            }
            found.unwrap_or_default()
        };

        let country = require(COUNTRY_COLUMN);
        let year = require(YEAR_COLUMN);
        let metrics = Metric::ALL.map(|metric| require(metric.column()));

        if missing.is_empty() {
            Ok(Self {
                country,
                year,
                metrics,
            })
        } else {
            Err(LoadError::MissingColumns(missing))
        }
    }
}

/// Reads the report CSV from a file.
pub fn load_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Row>, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading dataset");
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    read_rows(reader)
}

/// Reads the report CSV from any byte source.
pub fn load_rows_from_reader(source: impl Read) -> Result<Vec<Row>, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);
    read_rows(reader)
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Row>, LoadError> {
    let columns = Columns::locate(reader.headers()?)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let country = record.get(columns.country).unwrap_or_default().trim();
        if country.is_empty() {
            return Err(LoadError::InvalidRecord {
                line,
                reason: "empty country name".to_string(),
            });
        }

        let raw_year = record.get(columns.year).unwrap_or_default().trim();
        let year = raw_year
            .parse::<i32>()
            .map_err(|_| LoadError::InvalidRecord {
                line,
                reason: format!("invalid year {raw_year:?}"),
            })?;

        let mut row = Row::new(country, year);
        for metric in Metric::ALL {
            let raw = record.get(columns.metrics[metric.index()]).unwrap_or_default();
            let value = coerce_metric(raw);
            if value.is_none() && !raw.trim().is_empty() {
                tracing::debug!(line, column = metric.column(), raw, "coerced to missing");
            }
            row.set_metric(metric, value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(rows)
}

/// Empty, unparsable and non-finite cells are missing data, never an error.
pub fn coerce_metric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
