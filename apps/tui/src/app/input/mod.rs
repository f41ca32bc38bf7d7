pub mod helpers;
mod dashboard;
mod help;
mod search;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.search_input.is_some() {
        search::handle_search_input(app, key);
        return;
    }

    dashboard::handle_dashboard_input(app, key);
}
