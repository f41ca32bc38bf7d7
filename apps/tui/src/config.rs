use crate::domain::{INITIAL_YEAR, YEAR_MAX, YEAR_MIN};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DATA_VAR: &str = "DASHBOARD_DATA";
pub const YEAR_VAR: &str = "DASHBOARD_YEAR";
pub const LOG_DIR_VAR: &str = "DASHBOARD_LOG_DIR";
pub const DEBUG_VAR: &str = "DEBUG";

const DEFAULT_DATA: &str = "data/sample-happiness.csv";
const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub year: i32,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA),
            year: INITIAL_YEAR,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            debug: false,
        }
    }
}

impl DashboardConfig {
    /// Builds the config from any variable source. Unparsable years fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let year = lookup(YEAR_VAR)
            .and_then(|value| value.trim().parse::<i32>().ok())
            .map_or(defaults.year, |year| year.clamp(YEAR_MIN, YEAR_MAX));
        let debug = lookup(DEBUG_VAR).is_some_and(|value| is_truthy(&value));

        Self {
            data_path: lookup(DATA_VAR).map_or(defaults.data_path, PathBuf::from),
            year,
            log_dir: lookup(LOG_DIR_VAR).map_or(defaults.log_dir, PathBuf::from),
            debug,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Loads `.env` if present, then reads the dashboard settings from the environment.
pub fn init_app_config() -> DashboardConfig {
    dotenv().ok();
    DashboardConfig::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_variables() {
        assert_eq!(DashboardConfig::from_lookup(lookup(&[])), DashboardConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (DATA_VAR, "/tmp/report.csv"),
            (YEAR_VAR, "2017"),
            (LOG_DIR_VAR, "/tmp/logs"),
            (DEBUG_VAR, "true"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/report.csv"));
        assert_eq!(config.year, 2017);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert!(config.debug);
    }

    #[test]
    fn year_is_clamped_to_the_slider() {
        let late = DashboardConfig::from_lookup(lookup(&[(YEAR_VAR, "2031")]));
        assert_eq!(late.year, YEAR_MAX);
        let early = DashboardConfig::from_lookup(lookup(&[(YEAR_VAR, "1999")]));
        assert_eq!(early.year, YEAR_MIN);
        let junk = DashboardConfig::from_lookup(lookup(&[(YEAR_VAR, "soon")]));
        assert_eq!(junk.year, INITIAL_YEAR);
    }

    #[test]
    fn debug_needs_a_truthy_value() {
        assert!(!DashboardConfig::from_lookup(lookup(&[(DEBUG_VAR, "0")])).debug);
        assert!(DashboardConfig::from_lookup(lookup(&[(DEBUG_VAR, "1")])).debug);
    }
}
