mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use happiness_dashboard::config::init_app_config;
use happiness_dashboard::data::load_rows_from_path;
use happiness_dashboard::{Dashboard, DataStore};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();

    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init_logging(&config.log_dir, config.debug)?;

    let rows = load_rows_from_path(&config.data_path).wrap_err_with(|| {
        format!("failed to load dataset {}", config.data_path.display())
    })?;
    let store = DataStore::load(rows)?;

    let mut dashboard = Dashboard::new(store, config.year);
    if args.step != 0 {
        dashboard.go_to_step(args.step);
    }
    if let Some(metric) = args.scatter_x {
        dashboard.set_scatter_metric(metric);
    }

    if args.headless || !is_terminal() {
        return event::run_headless(&mut dashboard, args.json);
    }

    let mut app = App::new(dashboard);
    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
