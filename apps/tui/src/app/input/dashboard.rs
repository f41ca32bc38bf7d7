use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::PageDown => app.next_step(),
        KeyCode::Char('k') | KeyCode::PageUp => app.previous_step(),
        KeyCode::Left => app.shift_year(-1),
        KeyCode::Right => app.shift_year(1),
        KeyCode::Down => app.move_cursor(true),
        KeyCode::Up => app.move_cursor(false),
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Enter => app.click_focused(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('x') => app.cycle_scatter_metric(),
        KeyCode::Char('c') => app.clear(),
        KeyCode::Char('u') => app.unclear(),
        _ => {}
    }
}
