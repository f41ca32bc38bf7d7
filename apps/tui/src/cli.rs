use clap::Parser;
use happiness_dashboard::config::{DATA_VAR, DEBUG_VAR, LOG_DIR_VAR, YEAR_VAR};
use happiness_dashboard::views::SCATTER_METRICS;
use happiness_dashboard::Metric;

#[derive(Debug, Parser)]
#[command(
    name = "happiness-dashboard",
    version,
    about = "World happiness report dashboard"
)]
pub struct CliArgs {
    /// Dataset CSV to load
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Year to open on
    #[arg(long)]
    pub year: Option<i32>,

    /// Step to open on (0 = Life Ladder)
    #[arg(long, default_value_t = 0)]
    pub step: i64,

    /// Scatterplot x-axis metric, e.g. gdp or "Social support"
    #[arg(long = "scatter-x", value_name = "METRIC", value_parser = parse_scatter_metric)]
    pub scatter_x: Option<Metric>,

    /// Print the min/max of every step and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override log directory
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_dir: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var(DATA_VAR, data);
        }
        if let Some(year) = self.year {
            std::env::set_var(YEAR_VAR, year.to_string());
        }
        if let Some(dir) = &self.log_dir {
            std::env::set_var(LOG_DIR_VAR, dir);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }
}

fn parse_scatter_metric(value: &str) -> Result<Metric, String> {
    match Metric::parse(value) {
        Some(metric) if SCATTER_METRICS.contains(&metric) => Ok(metric),
        Some(metric) => Err(format!("{metric} is the scatterplot's y-axis")),
        None => Err(format!("unknown metric {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_flag() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "happiness-dashboard",
            "--data",
            "report.csv",
            "--year",
            "2015",
            "--step",
            "3",
            "--scatter-x",
            "Generosity",
            "--headless",
            "--json",
            "--log-dir",
            "/tmp/logs",
        ])?;
        assert_eq!(args.data.as_deref(), Some("report.csv"));
        assert_eq!(args.year, Some(2015));
        assert_eq!(args.step, 3);
        assert_eq!(args.scatter_x, Some(Metric::Generosity));
        assert!(args.headless && args.json);
        assert!(!args.debug);
        assert_eq!(args.log_dir.as_deref(), Some("/tmp/logs"));
        Ok(())
    }

    #[test]
    fn scatter_axis_must_be_an_x_metric() {
        assert_eq!(parse_scatter_metric("gdp"), Ok(Metric::Gdp));
        assert!(parse_scatter_metric("life-ladder").is_err());
        assert!(parse_scatter_metric("happiness").is_err());
        assert!(CliArgs::try_parse_from(["happiness-dashboard", "--scatter-x", "wealth"]).is_err());
    }
}
